use crate::api::client::UploadClient;
use crate::cli::command_handlers::{ConfigHandler, HelperHandler, UploadHandler};
use crate::cli::main_types::Commands;
use crate::core::services::config_service::ConfigService;
use crate::error::{AppError, CliError};
use crate::storage::config::Config;
use crate::storage::credentials::resolve_token;
use crate::utils::logging::print_verbose;
use crate::utils::validation::validate_url;
use std::path::PathBuf;

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    verbose: bool,
    url: Option<String>,
    token: Option<String>,
}

impl Dispatcher {
    fn log_verbose(&self, msg: &str) {
        print_verbose(self.verbose, msg);
    }

    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        verbose: bool,
        url: Option<String>,
        token: Option<String>,
    ) -> Self {
        Self {
            config,
            config_path,
            verbose,
            url,
            token,
        }
    }

    // CLI argument > environment variable > config file
    fn get_url(&self) -> Result<String, AppError> {
        self.url
            .clone()
            .filter(|u| !u.is_empty())
            .or_else(|| self.config.get_url())
            .ok_or_else(|| {
                AppError::Cli(CliError::UrlNotConfigured {
                    hint: "Use 'signed-upload config set --url <url>' or set SIGNED_UPLOAD_URL"
                        .to_string(),
                })
            })
    }

    fn create_client(&self) -> Result<UploadClient, AppError> {
        let url = self.get_url()?;
        validate_url(&url)?;
        let client = UploadClient::with_timeout(url, self.config.timeout_seconds())?;

        match resolve_token(self.token.clone()) {
            Some(token) => {
                self.log_verbose("Creating client with token");
                Ok(client.with_token(token))
            }
            None => {
                self.log_verbose("Creating client without token");
                Ok(client)
            }
        }
    }

    pub async fn dispatch(&self, command: Commands) -> Result<(), AppError> {
        match command {
            Commands::Upload(args) => {
                let client = self.create_client()?;
                UploadHandler::new()
                    .handle_upload(args, client, &self.config, self.verbose)
                    .await
            }
            Commands::Image(args) => {
                let client = self.create_client()?;
                UploadHandler::new()
                    .handle_image(args, client, &self.config, self.verbose)
                    .await
            }
            Commands::Check(args) => HelperHandler::new().handle_check(args, self.verbose),
            Commands::Base64 { file } => {
                HelperHandler::new()
                    .handle_base64(file, self.verbose)
                    .await
            }
            Commands::Accept(args) => HelperHandler::new().handle_accept(args),
            Commands::Config { command } => {
                let mut config_service = ConfigService::new(self.config.clone());
                ConfigHandler::new().handle(
                    command,
                    &mut config_service,
                    self.config_path.clone(),
                    self.verbose,
                )
            }
        }
    }
}
