//! The bundled flag archive: loading it from the binary, unpacking it into a
//! per-run working directory, and removing that directory again.

mod embedded;
mod extract;
mod working_dir;

pub use embedded::EmbeddedArchive;
pub use extract::{extract_archive, Extraction};
pub use working_dir::{tick_count, WorkingDirectory};
