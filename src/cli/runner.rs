use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use favicrop::{IconParams, process_with_params};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) -> Result<(), AppError> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Config file (if any) first, then explicit flags on top.
pub fn resolve_params(args: &CliArgs) -> Result<IconParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::MissingConfig { path: path.clone() });
            }
            IconParams::from_json_file(path)?
        }
        None => IconParams::default(),
    };

    if let Some(size) = args.size {
        params.size = size;
    }
    if let Some(ratio) = args.crop_ratio {
        params.crop_ratio = ratio;
    }
    if let Some(shift) = args.vertical_shift {
        params.vertical_shift = shift;
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(fill) = args.fill {
        params.fill = fill;
    }
    if let Some(compression) = args.compression {
        params.compression = compression;
    }

    params.validate()?;
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose)?;

    let params = resolve_params(&args)?;
    debug!("Resolved parameters: {:?}", params);

    let outputs = process_with_params(&args.input, &args.output, &params)
        .map_err(AppError::from)?;
    info!(
        "Done: {}x{} -> {}x{} icons",
        outputs.source_width, outputs.source_height, outputs.size, outputs.size
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use favicrop::{FillPolicy, PngCompression, ResampleFilter};

    #[test]
    fn flags_parse_into_params() {
        let args = CliArgs::parse_from([
            "favicrop",
            "in.png",
            "out/icon.png",
            "--size",
            "256",
            "--fill",
            "reject",
            "--filter",
            "catmull-rom",
            "--vertical-shift",
            "-0.1",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.size, 256);
        assert_eq!(params.fill, FillPolicy::Reject);
        assert_eq!(params.filter, ResampleFilter::CatmullRom);
        assert_eq!(params.vertical_shift, -0.1);
        assert_eq!(params.compression, PngCompression::Best);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("icon.json");
        std::fs::write(&config, r#"{ "size": 128, "compression": "fast", "crop_ratio": 0.5 }"#)
            .unwrap();
        let config_arg = config.to_string_lossy().to_string();

        let args = CliArgs::parse_from([
            "favicrop",
            "in.png",
            "icon.png",
            "--config",
            config_arg.as_str(),
            "--size",
            "64",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.size, 64);
        assert_eq!(params.compression, PngCompression::Fast);
        assert_eq!(params.crop_ratio, 0.5);
    }

    #[test]
    fn missing_config_is_reported() {
        let args = CliArgs::parse_from(["favicrop", "in.png", "icon.png", "--config", "/no/such.json"]);
        assert!(matches!(resolve_params(&args), Err(AppError::MissingConfig { .. })));
    }

    #[test]
    fn invalid_flag_values_fail_validation() {
        let args = CliArgs::parse_from(["favicrop", "in.png", "icon.png", "--crop-ratio", "0"]);
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::Favicrop(favicrop::Error::InvalidArgument { arg: "crop_ratio", .. }))
        ));
    }
}
