use clap::{value_parser, Arg, ArgMatches, Command};
use hl_config::Loader;
use hl_lsp::HlLanguageServer;
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};
use tracing_subscriber::EnvFilter;

fn build_cli() -> Command {
    Command::new("hl-lsp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Hyperlambda language server, speaking LSP over stdio")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration layered over the built-in defaults"),
        )
}

fn loader_for(matches: &ArgMatches) -> Loader {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_env("HL_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = build_cli().get_matches();
    let config = match loader_for(&matches).build() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    let lexer = match config.lexer() {
        Ok(lexer) => lexer,
        Err(err) => {
            tracing::error!(%err, "failed to load vocabulary");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(words = lexer.vocabulary().len(), "starting hl-lsp");

    let completion = config.completion;
    let (service, socket) =
        LspService::new(move |client| HlLanguageServer::new(client, lexer, completion));
    Server::new(stdin(), stdout(), socket).serve(service).await;
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn config_flag_is_layered() {
        let matches = build_cli()
            .try_get_matches_from(["hl-lsp", "--config", "/nonexistent/hl.toml"])
            .unwrap();
        assert_eq!(
            matches.get_one::<PathBuf>("config"),
            Some(&PathBuf::from("/nonexistent/hl.toml"))
        );
        assert!(loader_for(&matches).build().is_err());
    }

    #[test]
    fn defaults_without_flags() {
        let matches = build_cli().try_get_matches_from(["hl-lsp"]).unwrap();
        assert!(loader_for(&matches).build().is_ok());
    }

    #[test]
    fn misspelled_flag_is_rejected() {
        let err = build_cli()
            .try_get_matches_from(["hl-lsp", "--confg", "x.toml"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
