use crate::api::client::UploadClient;
use crate::api::models::UploadedFile;
use crate::cli::main_types::{AcceptArgs, CheckArgs, ConfigCommands, ImageArgs, UploadArgs};
use crate::core::accept::UploadTypeOptions;
use crate::core::data_url::get_base64_with_file;
use crate::core::file_type::{check_file_type, check_picture_type};
use crate::core::host::{ConsoleNotifier, PathPicker};
use crate::core::services::config_service::ConfigService;
use crate::core::services::types::{FileCandidate, FileOptions, MediaKind, MediaOptions};
use crate::core::services::upload_service::UploadService;
use crate::display::{TableDisplay, TypeCheckRow};
use crate::error::{AppError, CliError, UploadError};
use crate::storage::config::Config;
use crate::utils::error_helpers::convert_file_error;
use crate::utils::logging::print_verbose;
use crate::utils::validation::{validate_max_size, validate_upload_type};
use std::path::{Path, PathBuf};

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn print_uploaded(files: &[UploadedFile], json: bool) -> Result<(), AppError> {
    if json {
        let output = serde_json::to_string_pretty(files).map_err(|e| {
            AppError::Cli(CliError::InvalidArguments(format!(
                "Failed to serialize results: {}",
                e
            )))
        })?;
        println!("{}", output);
    } else {
        println!("{}", TableDisplay::new().render_uploaded_files(files));
    }
    Ok(())
}

#[derive(Default)]
pub struct UploadHandler;

impl UploadHandler {
    pub fn new() -> Self {
        Self
    }

    /// `upload`: size/format gate per file, then upload the files that passed
    pub async fn handle_upload(
        &self,
        args: UploadArgs,
        client: UploadClient,
        config: &Config,
        verbose: bool,
    ) -> Result<(), AppError> {
        let upload_type = args.upload_type.unwrap_or_else(|| config.upload_type());
        validate_upload_type(&upload_type)?;
        let max_size = args.max_size.unwrap_or_else(|| config.max_size_mb());
        validate_max_size(max_size)?;
        let accept = if args.accept.is_empty() {
            config.accept()
        } else {
            args.accept
        };

        print_verbose(
            verbose,
            &format!(
                "Uploading {} file(s) as '{}' (accept: {}, max {}M)",
                args.files.len(),
                upload_type,
                accept.join(","),
                max_size
            ),
        );

        let service = UploadService::new(
            client,
            upload_type,
            ConsoleNotifier::new().quiet(args.json),
            PathPicker::default(),
        );

        let mut passed: Vec<PathBuf> = Vec::new();
        let mut rejected: Vec<String> = Vec::new();
        for path in args.files {
            let metadata = tokio::fs::metadata(&path)
                .await
                .map_err(|e| convert_file_error(e, &path))?;
            let candidate = FileCandidate::new(file_name_of(&path), metadata.len());
            if service.before_upload(&candidate, &accept, max_size) {
                passed.push(path);
            } else {
                rejected.push(candidate.name);
            }
        }

        if passed.is_empty() {
            return Err(UploadError::Rejected {
                name: rejected.join(", "),
                reason: "did not pass the size/format checks".to_string(),
            }
            .into());
        }

        let options = FileOptions {
            count: Some(passed.len() as u32),
            extension: Vec::new(),
        };
        let service = service.with_picker(PathPicker::new(passed));
        let uploaded = service.file_upload(&options).await?;

        print_uploaded(&uploaded, args.json)
    }

    /// `image`: upload images only, typed by their detected format
    pub async fn handle_image(
        &self,
        args: ImageArgs,
        client: UploadClient,
        config: &Config,
        verbose: bool,
    ) -> Result<(), AppError> {
        let upload_type = args.upload_type.unwrap_or_else(|| config.upload_type());
        validate_upload_type(&upload_type)?;
        print_verbose(
            verbose,
            &format!("Uploading {} image(s) as '{}'", args.files.len(), upload_type),
        );

        let options = MediaOptions {
            count: Some(args.files.len() as u32),
            media_type: vec![MediaKind::Image],
            ..Default::default()
        };
        let service = UploadService::new(
            client,
            upload_type,
            ConsoleNotifier::new().quiet(args.json),
            PathPicker::new(args.files),
        );
        let uploaded = service.media_upload(&options).await?;

        print_uploaded(&uploaded, args.json)
    }
}

#[derive(Default)]
pub struct HelperHandler;

impl HelperHandler {
    pub fn new() -> Self {
        Self
    }

    /// `check`: table of accepted/rejected names; fails when any is rejected
    pub fn handle_check(&self, args: CheckArgs, verbose: bool) -> Result<(), AppError> {
        print_verbose(
            verbose,
            &format!(
                "Checking {} name(s) against {}",
                args.files.len(),
                if args.accept.is_empty() {
                    "the default set".to_string()
                } else {
                    args.accept.join(",")
                }
            ),
        );

        let rows: Vec<TypeCheckRow> = args
            .files
            .iter()
            .map(|file| {
                let name = file_name_of(Path::new(file));
                let accepted = if args.picture {
                    check_picture_type(&name, &args.accept)
                } else {
                    check_file_type(&name, &args.accept)
                };
                TypeCheckRow {
                    size: std::fs::metadata(file).ok().map(|m| m.len()),
                    name,
                    accepted,
                }
            })
            .collect();

        println!("{}", TableDisplay::new().render_type_checks(&rows));

        match rows.iter().find(|row| !row.accepted) {
            Some(row) => Err(UploadError::Rejected {
                name: row.name.clone(),
                reason: "extension not accepted".to_string(),
            }
            .into()),
            None => Ok(()),
        }
    }

    /// `base64`: print the file as a data URL
    pub async fn handle_base64(&self, file: PathBuf, verbose: bool) -> Result<(), AppError> {
        print_verbose(verbose, &format!("Encoding {}", file.display()));
        let converted = get_base64_with_file(&file).await?;
        println!("{}", converted.result);
        Ok(())
    }

    /// `accept`: accept attribute string and help text
    pub fn handle_accept(&self, args: AcceptArgs) -> Result<(), AppError> {
        let options = UploadTypeOptions {
            accept: args.accept,
            help_text: args.help_text,
            max_number: args.max_number,
            max_size: args.max_size,
        };
        println!("Accept: {}", options.get_string_accept());
        println!("Help:   {}", options.get_help_text());
        Ok(())
    }
}

#[derive(Default)]
pub struct ConfigHandler;

impl ConfigHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &self,
        command: ConfigCommands,
        config_service: &mut ConfigService,
        config_path: Option<PathBuf>,
        verbose: bool,
    ) -> Result<(), AppError> {
        match command {
            ConfigCommands::Show => {
                print_verbose(verbose, "Attempting config show command");
                let config = config_service.config();

                println!("Current Configuration:");
                println!("=====================");
                println!(
                    "URL:          {}",
                    config.get_url().unwrap_or_else(|| "(not set)".to_string())
                );
                println!("Upload type:  {}", config.upload_type());
                println!("Max size:     {}M", config.max_size_mb());
                println!("Timeout:      {} seconds", config.timeout_seconds());
                println!("Accept:       {}", config.accept().join(","));
                Ok(())
            }
            ConfigCommands::Set {
                url,
                upload_type,
                max_size,
                timeout,
                accept,
            } => {
                let updates = [
                    ("url", url),
                    ("upload-type", upload_type),
                    ("max-size", max_size.map(|v| v.to_string())),
                    ("timeout", timeout.map(|v| v.to_string())),
                    ("accept", accept),
                ];

                let mut changed = 0;
                for (field, value) in updates {
                    if let Some(value) = value {
                        print_verbose(verbose, &format!("Setting {} = {}", field, value));
                        config_service.set_field(field, &value)?;
                        changed += 1;
                    }
                }

                if changed == 0 {
                    return Err(AppError::Cli(CliError::InvalidArguments(
                        "Nothing to set. Use --url, --upload-type, --max-size, --timeout or --accept"
                            .to_string(),
                    )));
                }

                config_service.save_config(config_path)?;
                println!("✅ Configuration saved");
                Ok(())
            }
        }
    }
}
