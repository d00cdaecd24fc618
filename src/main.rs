use anyhow::{anyhow, Context, Result};
use eframe::NativeOptions;
use edubot::ai::Responder;
use edubot::config::Config;
use edubot::core::EduAgent;
use edubot::logger;
use edubot::services::KnowledgeBase;
use edubot::ui::EduBotApp;
use std::sync::Arc;

fn main() {
    println!("🎓 Initializing Educational Chatbot...");

    if let Err(e) = run() {
        log::error!("❌ Startup failed: {:#}", e);
        eprintln!("❌ Error starting EduBot: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    logger::init(&config.log_file)?;
    log::info!("🚀 {} starting", config.bot_name);

    println!("📚 Loading knowledge base...");
    let knowledge = Arc::new(KnowledgeBase::embedded()?);
    let welcome = knowledge.text("welcome").to_string();
    let agent = EduAgent::new(&config, Responder::new(knowledge));

    // Runtime for the background reply tasks
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let _guard = rt.enter();

    println!("🚀 Starting interactive learning session...");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let window_title = config.window_title.clone();
    eframe::run_native(
        &window_title,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(EduBotApp::new(config, agent, &welcome)))
        }),
    )
    .map_err(|e| anyhow!("window could not be created: {}", e))?;

    log::info!("👋 Session finished");
    Ok(())
}
