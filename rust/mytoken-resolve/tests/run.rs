//! Tests for the `resolve` command line front end.
mod run {
    use clap::Parser;
    use mytoken_resolve::{Format, ResolveCli, ResolveError, run};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    fn resolve(args: &[&str], stdin: &str) -> Result<String, ResolveError> {
        let cli = ResolveCli::try_parse_from(std::iter::once("resolve").chain(args.iter().copied()))
            .expect("arguments are valid");
        let mut output = Vec::new();
        run(&cli, stdin.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output).expect("output is UTF-8"))
    }

    #[test]
    fn it_defaults_to_json_output() {
        let cli = ResolveCli::try_parse_from(["resolve", "AT"]).unwrap();
        assert_eq!(cli.format, Format::Json);
        assert_eq!(cli.log, "warn");
    }

    #[test]
    fn it_prints_the_request_body() -> TestResult {
        let output = resolve(&["AT", "tokeninfo:history", "tokeninfo", "read@AT"], "")?;
        assert_eq!(output, "{\"capabilities\":[\"AT\",\"tokeninfo\"]}\n");
        Ok(())
    }

    #[test]
    fn it_includes_subtoken_capabilities() -> TestResult {
        let output = resolve(
            &["create_mytoken", "--subtoken", "AT", "-s", "AT:sub"],
            "",
        )?;
        assert_eq!(
            output,
            "{\"capabilities\":[\"create_mytoken\"],\"subtoken_capabilities\":[\"AT\"]}\n"
        );
        Ok(())
    }

    #[test]
    fn it_reads_capabilities_from_stdin() -> TestResult {
        let output = resolve(
            &["--format", "lines"],
            "# selected in the form\nsettings:grants\n\n  read@settings  \nsettings\n",
        )?;
        assert_eq!(output, "settings\n");
        Ok(())
    }

    #[test]
    fn it_describes_capabilities() -> TestResult {
        let output = resolve(&["-f", "lines", "-d", "read@settings", "custom"], "")?;
        assert_eq!(
            output,
            "read@settings\twarning\tAllows to modify user settings.\ncustom\tunknown\n"
        );
        Ok(())
    }

    #[test]
    fn it_separates_subtoken_lines() -> TestResult {
        let output = resolve(&["-f", "lines", "create_mytoken", "-s", "AT"], "")?;
        assert_eq!(output, "create_mytoken\n\nAT\n");
        Ok(())
    }

    #[test]
    fn it_passes_malformed_capabilities_through() -> TestResult {
        let output = resolve(&["-f", "lines", "a::b", "", "b"], "")?;
        assert_eq!(output, "a::b\n\nb\n");
        Ok(())
    }

    #[test]
    fn it_rejects_malformed_capabilities_when_strict() {
        let error = resolve(&["--strict", "AT", "a::b"], "").unwrap_err();
        assert!(matches!(error, ResolveError::Capability(_)));
        assert_eq!(
            error.to_string(),
            "Capability \"a::b\" contains an empty path segment"
        );

        let error = resolve(&["--strict", "AT", "-s", "read@"], "").unwrap_err();
        assert_eq!(error.to_string(), "Capability \"read@\" has an empty path");
    }
}
