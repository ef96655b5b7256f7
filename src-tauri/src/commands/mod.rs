pub mod flag_cmds;
