//! Desktop GUI for PDF text extraction and NLP analysis using Tauri.

#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

mod commands;

use commands::SessionState;
use pdfnlp_core::AnalysisSession;
use std::sync::Mutex;

#[cfg(debug_assertions)]
use tauri::Manager;

fn main() {
    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_fs::init())
        .manage(SessionState(Mutex::new(AnalysisSession::new())))
        .invoke_handler(tauri::generate_handler![
            commands::select_document,
            commands::extract_document,
            commands::summarize_document,
            commands::list_entities,
            commands::extract_keywords,
            commands::analyze_sentiment,
            commands::speak_document,
            commands::save_document,
            commands::clear_document,
        ])
        .setup(|_app| {
            #[cfg(debug_assertions)]
            {
                let window = _app.get_webview_window("main").unwrap();
                window.open_devtools();
            }
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
