use anyhow::Context;
use tauri::{Manager, RunEvent};
use tauri_plugin_log::{Target, TargetKind};

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use commands::flag_cmds::PipelineState;
use services::config::CatalogConfig;
use services::pipeline::FlagPipeline;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Exit code stays 0; a failed start is only reported.
    if let Err(e) = try_run() {
        log::error!("{e:#}");
        eprintln!("error while running flag viewer: {e:#}");
    }
}

fn try_run() -> anyhow::Result<()> {
    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(
            tauri_plugin_log::Builder::default()
                .level(log::LevelFilter::Info)
                .targets([
                    Target::new(TargetKind::Stdout),
                    Target::new(TargetKind::LogDir {
                        file_name: Some("flag-viewer".into()),
                    }),
                ])
                .build(),
        )
        .manage(PipelineState::new(FlagPipeline::new(CatalogConfig::default())))
        .invoke_handler(tauri::generate_handler![
            commands::flag_cmds::load_catalog,
            commands::flag_cmds::show_random_flag,
            commands::flag_cmds::refresh_flag,
        ])
        .build(tauri::generate_context!())
        .context("failed to build tauri application")?;

    app.run(|app_handle, event| {
        if let RunEvent::Exit = event {
            app_handle.state::<PipelineState>().shutdown();
        }
    });
    Ok(())
}
