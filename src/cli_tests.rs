use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn chart_kind_parses_case_insensitively() {
    assert_eq!("Donut".parse::<ChartKind>().unwrap(), ChartKind::Donut);
    assert!(matches!(
        "radar".parse::<ChartKind>(),
        Err(DashError::UnknownChartKind(_))
    ));
}

#[test]
fn chart_command_with_defaults() {
    let cli = Cli::parse_from(["insights-dash", "chart", "grouped", "--input", "data.json"]);
    match cli.command {
        Commands::Chart(args) => {
            assert_eq!(args.kind, ChartKind::Grouped);
            assert_eq!(args.input, PathBuf::from("data.json"));
            assert!(args.output.is_none());
            assert_eq!(args.title, "Chart");
        }
        _ => panic!("Expected Chart command"),
    }
}

#[test]
fn export_accepts_subject_or_path() {
    let cli = Cli::parse_from(["insights-dash", "export", "top_applicants"]);
    match cli.command {
        Commands::Export(args) => assert_eq!(args.query, Query::TopApplicants),
        _ => panic!("Expected Export command"),
    }

    let cli = Cli::parse_from([
        "insights-dash",
        "export",
        "users-application-status",
        "--filter",
        "not_applied",
        "--start",
        "2024-01-01",
    ]);
    match cli.command {
        Commands::Export(args) => {
            assert_eq!(args.query, Query::UsersApplicationStatus);
            assert_eq!(ApplicationFilter::from(args.filter), ApplicationFilter::NotApplied);
            assert_eq!(args.range.start.as_deref(), Some("2024-01-01"));
            assert!(args.range.end.is_none());
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn export_rejects_unknown_query() {
    assert!(Cli::try_parse_from(["insights-dash", "export", "nope"]).is_err());
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::parse_from(["insights-dash", "queries", "-vv", "--no-config"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.no_config);
    assert!(matches!(cli.command, Commands::Queries));
}

#[test]
fn config_conflicts_with_no_config() {
    let result = Cli::try_parse_from([
        "insights-dash",
        "--config",
        "dash.toml",
        "--no-config",
        "queries",
    ]);
    assert!(result.is_err());
}

#[test]
fn report_defaults() {
    let cli = Cli::parse_from(["insights-dash", "report"]);
    match cli.command {
        Commands::Report(args) => {
            assert_eq!(args.output, PathBuf::from("dashboard.html"));
            assert!(!args.watch);
        }
        _ => panic!("Expected Report command"),
    }
}
