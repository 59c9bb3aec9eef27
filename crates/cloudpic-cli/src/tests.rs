use std::io::Cursor;
use std::path::{Path, PathBuf};

use clap::Parser;
use cloudpic_core::Authorization;
use pretty_assertions::assert_eq;

use crate::cli::{Cli, Commands, CompletionShell};
use crate::commands::common::{derive_public_id, normalize_public_id, prompt_file_name};
use crate::commands::completions::write_completions;
use crate::commands::sign::format_authorization;
use crate::error::CliError;
use crate::log_filter;

#[test]
fn derive_public_id_cuts_at_first_dot() {
    assert_eq!(derive_public_id(Path::new("cat.png")).unwrap(), "cat");
    assert_eq!(
        derive_public_id(Path::new("holiday.2024.jpg")).unwrap(),
        "holiday"
    );
}

#[test]
fn derive_public_id_ignores_directories() {
    assert_eq!(
        derive_public_id(Path::new("photos/pets/cat.png")).unwrap(),
        "cat"
    );
}

#[test]
fn derive_public_id_keeps_extensionless_names() {
    assert_eq!(derive_public_id(Path::new("README")).unwrap(), "README");
}

#[test]
fn derive_public_id_rejects_dotfiles() {
    let err = derive_public_id(Path::new(".png")).unwrap_err();
    assert!(matches!(err, CliError::UnresolvedPublicId(_)));
}

#[test]
fn normalize_public_id_trims_and_rejects_empty() {
    assert_eq!(normalize_public_id("  cat ").unwrap(), "cat");
    assert!(matches!(
        normalize_public_id(" \t ").unwrap_err(),
        CliError::EmptyInput(_)
    ));
}

#[test]
fn prompt_file_name_writes_prompt_and_trims_answer() {
    let mut input = Cursor::new(b"  cat.png \n".to_vec());
    let mut output = Vec::new();

    let file_name = prompt_file_name(&mut input, &mut output).unwrap();

    assert_eq!(file_name, "cat.png");
    assert_eq!(String::from_utf8(output).unwrap(), "Enter file name: ");
}

#[test]
fn prompt_file_name_rejects_blank_answer() {
    let mut input = Cursor::new(b"\n".to_vec());
    let mut output = Vec::new();

    let err = prompt_file_name(&mut input, &mut output).unwrap_err();
    assert!(matches!(err, CliError::EmptyInput("File name")));
}

#[test]
fn upload_parses_optional_path_and_public_id() {
    let cli = Cli::try_parse_from(["cloudpic", "upload", "cat.png", "--public-id", "kitty"]).unwrap();
    match cli.command {
        Commands::Upload {
            file,
            public_id,
            json,
        } => {
            assert_eq!(file, Some(PathBuf::from("cat.png")));
            assert_eq!(public_id.as_deref(), Some("kitty"));
            assert!(!json);
        }
        _ => panic!("expected upload command"),
    }

    let cli = Cli::try_parse_from(["cloudpic", "upload"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Upload {
            file: None,
            public_id: None,
            ..
        }
    ));
}

#[test]
fn delete_is_an_alias_for_destroy() {
    let cli = Cli::try_parse_from(["cloudpic", "delete", "cat"]).unwrap();
    match cli.command {
        Commands::Destroy { public_id } => assert_eq!(public_id, "cat"),
        _ => panic!("expected destroy command"),
    }
}

#[test]
fn destroy_requires_public_id() {
    assert!(Cli::try_parse_from(["cloudpic", "destroy"]).is_err());
}

#[test]
fn format_authorization_plain_lines() {
    let auth = Authorization::derive("cat", 1_700_000_000, "secret");
    let lines = format_authorization(&auth, false).unwrap();
    assert_eq!(lines[0], "timestamp: 1700000000");
    assert_eq!(lines[1], format!("signature: {}", auth.signature));
}

#[test]
fn format_authorization_json() {
    let auth = Authorization::derive("cat", 1_700_000_000, "secret");
    let lines = format_authorization(&auth, true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["timestamp"], "1700000000");
    assert_eq!(value["signature"], auth.signature.as_str());
}

#[test]
fn completions_reference_binary_name() {
    for shell in [
        CompletionShell::Bash,
        CompletionShell::Zsh,
        CompletionShell::Fish,
    ] {
        let mut buffer = Vec::new();
        write_completions(shell, &mut buffer);
        let script = String::from_utf8(buffer).unwrap();
        assert!(script.contains("cloudpic"), "{shell:?} script lacks binary name");
    }
}

#[test]
fn log_filter_keeps_crate_directives() {
    let rendered = log_filter().to_string();
    assert!(rendered.contains("cloudpic=info"));
    assert!(rendered.contains("cloudpic_core=info"));
}
