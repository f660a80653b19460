use anyhow::Error;
use cnpjscout_config::ConfigError;
use cnpjscout_core::CoreError;
use cnpjscout_registry::RegistryError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            };
        }
        if let Some(registry_err) = cause.downcast_ref::<RegistryError>() {
            return registry_exit_code(registry_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn registry_exit_code(err: &RegistryError) -> u8 {
    match err {
        RegistryError::Io(_) | RegistryError::Status { .. } => EXIT_FAILURE,
        RegistryError::Parse(_)
        | RegistryError::MissingApiKey
        | RegistryError::InvalidUrl(_)
        | RegistryError::Unavailable(_) => EXIT_INVALID_INPUT,
        #[cfg(feature = "http-registry")]
        RegistryError::Http(_) => EXIT_FAILURE,
        #[cfg(feature = "http-registry")]
        RegistryError::Url(_) => EXIT_INVALID_INPUT,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::InvalidLimit(_)
        | ConfigError::InvalidRegistryField { .. }
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_status, invalid_input, not_found};
    use super::{EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_NOT_FOUND};
    use anyhow::{anyhow, Context as _};
    use cnpjscout_core::CoreError;
    use cnpjscout_registry::RegistryError;

    #[test]
    fn registry_rejections_are_failures() {
        let err: anyhow::Error = RegistryError::Status {
            status: 400,
            body: "bad filter".to_string(),
        }
        .into();
        assert_eq!(exit_status(&err.context("search cnpja registry")), EXIT_FAILURE);

        let err: anyhow::Error = RegistryError::MissingApiKey.into();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn cli_and_core_errors_map_through_context() {
        assert_eq!(exit_status(&not_found("no results to export")), EXIT_NOT_FOUND);
        assert_eq!(exit_status(&invalid_input("--limit")), EXIT_INVALID_INPUT);

        let result: Result<(), CoreError> = Err(CoreError::InvalidWindowDays(0));
        let err = result.context("build search window").unwrap_err();
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);

        assert_eq!(exit_status(&anyhow!("something else")), EXIT_FAILURE);
    }
}
