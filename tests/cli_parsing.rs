use atlas::cli::types::IssueArgs;
use atlas::cli::{resolve_config, Cli, Commands};
use atlas::Config;
use clap::Parser;

#[test]
fn test_parse_issue_with_payload() {
    let cli = Cli::try_parse_from([
        "atlas",
        "issue",
        "--payload",
        r#"{"subject":"alice"}"#,
    ])
    .unwrap();

    match cli.command {
        Commands::Issue(IssueArgs { body, issuer, .. }) => {
            assert_eq!(body.payload.as_deref(), Some(r#"{"subject":"alice"}"#));
            assert!(issuer.is_none());
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_issue_without_payload() {
    let cli = Cli::try_parse_from(["atlas", "issue"]).unwrap();

    match cli.command {
        Commands::Issue(args) => assert!(args.body.payload.is_none()),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_issue_typed_flags() {
    let cli = Cli::try_parse_from([
        "atlas",
        "issue",
        "--issuer",
        "did:rl:issuer",
        "--subject",
        "did:rl:alice",
        "--type",
        "StewardshipCredential",
    ])
    .unwrap();

    match cli.command {
        Commands::Issue(args) => {
            assert_eq!(args.issuer.as_deref(), Some("did:rl:issuer"));
            assert_eq!(args.subject.as_deref(), Some("did:rl:alice"));
            assert_eq!(args.credential_type.as_deref(), Some("StewardshipCredential"));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_typed_flags_conflict_with_payload() {
    let result = Cli::try_parse_from([
        "atlas",
        "issue",
        "--payload",
        "{}",
        "--issuer",
        "did:rl:issuer",
        "--subject",
        "did:rl:alice",
        "--type",
        "T",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_issuer_requires_subject_and_type() {
    let result = Cli::try_parse_from(["atlas", "issue", "--issuer", "did:rl:issuer"]);
    assert!(result.is_err());
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "atlas",
        "status",
        "vrc-42",
        "--json",
        "--base-url",
        "https://atlas.example.com",
        "--api-key",
        "secret123",
        "--timeout-secs",
        "5",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::Status { ref credential_id } => assert_eq!(credential_id, "vrc-42"),
        ref other => panic!("Wrong command: {other:?}"),
    }

    let mut config = Config::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config.base_url, "https://atlas.example.com");
    assert_eq!(config.api_key.as_deref(), Some("secret123"));
    assert_eq!(config.timeout_secs, Some(5));
}

#[test]
fn test_no_overrides_keep_config() {
    let cli = Cli::try_parse_from(["atlas", "resolve-did", "did:rl:alice"]).unwrap();

    let mut config = Config {
        base_url: "https://atlas.example.com".to_string(),
        api_key: Some("from-file".to_string()),
        ..Default::default()
    };
    cli.apply_overrides(&mut config);

    assert_eq!(config.base_url, "https://atlas.example.com");
    assert_eq!(config.api_key.as_deref(), Some("from-file"));
}

#[test]
fn test_parse_submit_measurement() {
    let cli = Cli::try_parse_from([
        "atlas",
        "submit-measurement",
        "sensor-1",
        "--timestamp",
        "2024-05-01T00:00:00Z",
        "--value",
        r#"{"vwc":0.31}"#,
        "--signature",
        "sig",
    ])
    .unwrap();

    match cli.command {
        Commands::SubmitMeasurement(args) => {
            assert_eq!(args.sensor_id, "sensor-1");
            assert!(args.schema.is_none());
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_register_sensor_capabilities() {
    let cli = Cli::try_parse_from([
        "atlas",
        "register-sensor",
        "--did",
        "did:rl:sensor-1",
        "--owner",
        "did:rl:farm",
        "--capability",
        "soil-moisture",
        "--capability",
        "temperature",
    ])
    .unwrap();

    match cli.command {
        Commands::RegisterSensor(args) => {
            assert_eq!(args.capabilities, vec!["soil-moisture", "temperature"]);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_activation_with_claim_and_action() {
    let cli = Cli::try_parse_from([
        "atlas",
        "submit-activation",
        "--subject",
        "did:rl:farm",
        "--credential-id",
        "vrc-1",
        "--claim-id",
        "claim-9",
        "--action",
        r#"{"type":"incentive","amount":500}"#,
    ])
    .unwrap();

    match cli.command {
        Commands::SubmitActivation(args) => {
            assert_eq!(args.claim_id.as_deref(), Some("claim-9"));
            assert_eq!(args.action.as_deref(), Some(r#"{"type":"incentive","amount":500}"#));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_attach_stewardship() {
    let cli = Cli::try_parse_from([
        "atlas",
        "attach-stewardship",
        "did:rl:land-1",
        "-p",
        r#"{"steward":"did:rl:farm"}"#,
    ])
    .unwrap();

    match cli.command {
        Commands::AttachStewardship { did, body } => {
            assert_eq!(did, "did:rl:land-1");
            assert_eq!(body.payload.as_deref(), Some(r#"{"steward":"did:rl:farm"}"#));
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_verify_and_trigger_conditions() {
    let cli = Cli::try_parse_from([
        "atlas",
        "verify-and-trigger",
        "--activation-id",
        "act-1",
        "--condition",
        r#"{"credentialId":"vrc-1"}"#,
        "--condition",
        r#"{"claimId":"claim-9"}"#,
        "--on-success",
        r#"{"smartContract":"payout"}"#,
    ])
    .unwrap();

    match cli.command {
        Commands::VerifyAndTrigger(args) => {
            assert_eq!(args.activation_id.as_deref(), Some("act-1"));
            assert_eq!(args.conditions.len(), 2);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_commons_queries() {
    let cli = Cli::try_parse_from([
        "atlas",
        "metrics",
        "soilCarbon",
        "--bbox",
        "-74.3,10.4,-74.1,10.6",
        "--time-range",
        "P30D",
    ])
    .unwrap();

    match cli.command {
        Commands::Metrics(args) => {
            assert_eq!(args.metric, "soilCarbon");
            assert_eq!(args.bbox.as_deref(), Some("-74.3,10.4,-74.1,10.6"));
            assert_eq!(args.time_range.as_deref(), Some("P30D"));
        }
        other => panic!("Wrong command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["atlas", "audit-trail"]).unwrap();
    match cli.command {
        Commands::AuditTrail(args) => {
            assert!(args.since.is_none());
            assert_eq!(args.limit, 50);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_base_url_flag_replaces_invalid_file_value() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("atlas.yaml");
    std::fs::write(&path, "base_url: atlas.example.com\n").unwrap();
    let path = path.to_str().unwrap().to_string();

    temp_env::with_vars_unset(
        [
            "ATLAS_BASE_URL",
            "ATLAS_API_KEY",
            "ATLAS_TIMEOUT_SECS",
            "ATLAS_LOGGING__LEVEL",
        ],
        || {
            let cli = Cli::try_parse_from([
                "atlas",
                "--config",
                path.as_str(),
                "--base-url",
                "https://atlas.example.com",
                "status",
                "vrc-1",
            ])
            .unwrap();
            let config = resolve_config(&cli).unwrap();
            assert_eq!(config.base_url, "https://atlas.example.com");

            let cli =
                Cli::try_parse_from(["atlas", "--config", path.as_str(), "status", "vrc-1"])
                    .unwrap();
            let err = resolve_config(&cli).unwrap_err();
            assert!(err.to_string().contains("Invalid base URL"));
        },
    );
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
