use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::adapters::GiphyGifProvider;
use crate::core::models::UserSettings;
use crate::core::orchestrators::{GifPlugin, SearchFlowMessage};
use crate::ports::{ConsoleHostSurface, DocumentFileSink, ReqwestHttpClient};
use crate::presentation::SearchModalView;

pub enum AppCommand {
    InsertRandom {
        document: PathBuf,
        cursor: Option<usize>,
    },
    Search {
        document: PathBuf,
        cursor: Option<usize>,
    },
    SetApiKey(String),
    ShowSettings,
}

pub struct GiphyApp {
    plugin: GifPlugin,
}

impl GiphyApp {
    pub fn build(settings_path: Option<PathBuf>) -> anyhow::Result<Self> {
        log::info!("[APP] Initializing application");

        let settings_path = match settings_path {
            Some(path) => path,
            None => UserSettings::default_file_path()?,
        };

        let http = Arc::new(ReqwestHttpClient::initialize());
        let provider = Arc::new(GiphyGifProvider::new(http));
        let host = Arc::new(ConsoleHostSurface::initialize());

        Ok(Self {
            plugin: GifPlugin::on_activate(settings_path, provider, host),
        })
    }

    pub async fn run(&mut self, command: AppCommand) -> anyhow::Result<ExitCode> {
        if !self.plugin.is_active() {
            anyhow::bail!("plugin is not active");
        }

        match command {
            AppCommand::InsertRandom { document, cursor } => {
                self.handle_insert_random(&document, cursor).await
            }
            AppCommand::Search { document, cursor } => self.handle_search(&document, cursor).await,
            AppCommand::SetApiKey(api_key) => {
                self.plugin.update_api_key(&api_key)?;
                println!("API key saved.");
                Ok(ExitCode::SUCCESS)
            }
            AppCommand::ShowSettings => {
                self.print_settings();
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.plugin.on_deactivate();
    }

    async fn handle_insert_random(
        &self,
        document: &Path,
        cursor: Option<usize>,
    ) -> anyhow::Result<ExitCode> {
        let sink = DocumentFileSink::capture(document, cursor)?;

        match self.plugin.insert_random_gif(&sink).await {
            Ok(fragment) => {
                print!("{}", fragment);
                Ok(ExitCode::SUCCESS)
            }
            // Already reported through the host surface.
            Err(_) => Ok(ExitCode::FAILURE),
        }
    }

    async fn handle_search(
        &self,
        document: &Path,
        cursor: Option<usize>,
    ) -> anyhow::Result<ExitCode> {
        let sink = DocumentFileSink::capture(document, cursor)?;

        let Ok((mut controller, mut receiver)) = self.plugin.open_gif_search(Box::new(sink))
        else {
            return Ok(ExitCode::FAILURE);
        };

        let mut input = spawn_stdin_reader();
        println!("{}", SearchModalView::render_ui(&controller));

        while !controller.is_closed() {
            tokio::select! {
                line = input.recv() => {
                    match line {
                        Some(line) => {
                            if let Some(message) = SearchModalView::parse_input(&line) {
                                controller.update(message);
                            }
                        }
                        None => controller.update(SearchFlowMessage::Close),
                    }
                }
                Some(message) = receiver.recv() => {
                    let settled = matches!(message, SearchFlowMessage::SearchResolved { .. });
                    controller.update(message);

                    if settled && !controller.is_closed() {
                        println!("{}", SearchModalView::render_ui(&controller));
                    }
                }
            }
        }

        Ok(ExitCode::SUCCESS)
    }

    fn print_settings(&self) {
        let panel = self.plugin.on_render_settings();

        println!("[{}]", panel.tab_id);
        for field in panel.fields {
            let value = if field.value.is_empty() {
                format!("({})", field.placeholder)
            } else {
                "configured".to_string()
            };
            println!("{}: {}", field.name, value);
            println!("  {}", field.description);
        }

        println!("Commands:");
        for command in GifPlugin::commands() {
            println!("  {} ({})", command.name, command.id);
        }
    }
}

// Stdin is read on a plain thread so a pending read never holds up
// runtime shutdown.
fn spawn_stdin_reader() -> UnboundedReceiver<String> {
    let (sender, receiver) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if sender.send(line).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    log::error!("[APP] Failed to read input: {}", error);
                    break;
                }
            }
        }
    });

    receiver
}
