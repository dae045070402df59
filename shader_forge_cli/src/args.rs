/// Command line parsing for build_shader and build_shaders

use std::path::PathBuf;
use shader_forge::forge::{BatchConfig, Error, Result};
use shader_forge::forge::log::LogSeverity;
use shader_forge::forge::stage::ShaderKind;
use shader_forge::forge::target::{ShaderModel, TargetFormat};

/// Which front-end is parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    /// `build_shader`: one source file, any target
    SingleFile,
    /// `build_shaders`: a directory of vertex/pixel sources, glsl or spirv
    Directory,
}

impl CliMode {
    pub fn program_name(&self) -> &'static str {
        match self {
            CliMode::SingleFile => "build_shader",
            CliMode::Directory => "build_shaders",
        }
    }
}

/// Options that do not end up in the BatchConfig
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub cross_compiler: Option<PathBuf>,
    pub platform_compiler: Option<PathBuf>,
    pub capture_output: bool,
    pub dry_run: bool,
    pub log_level: LogSeverity,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            cross_compiler: None,
            platform_compiler: None,
            capture_output: false,
            dry_run: false,
            log_level: LogSeverity::Info,
        }
    }
}

/// A fully validated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliRequest {
    pub batch: BatchConfig,
    pub options: CliOptions,
}

/// Outcome of argument parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArgs {
    Help,
    Run(CliRequest),
}

/// Usage text for `mode`
pub fn usage(mode: CliMode) -> String {
    let synopsis = match mode {
        CliMode::SingleFile => {
            "build_shader [options] <input-file> <glsl|spirv|dxil> [<vps|cs>] <output-dir>"
        }
        CliMode::Directory => "build_shaders [options] <input-directory> <glsl|spirv> <output-dir>",
    };
    format!(
        "Usage: {}\n\
         \n\
         Options:\n\
         \x20   --shader-model <ver>    Shader model for dxil (e.g. 6_0){}\n\
         \x20   --ext <extension>       Source extension in directory mode (default: hlsl)\n\
         \x20   --cross-compiler <path> ShaderConductorCmd executable\n\
         \x20   --dxc <path>            dxc executable\n\
         \x20   --capture-output        Forward backend output to the log\n\
         \x20   --dry-run               Print the backend command lines without running them\n\
         \x20   -v, --verbose           Debug logging\n\
         \x20   -q, --quiet             Warnings and errors only\n\
         \x20   -h, --help              Print this help",
        synopsis,
        if mode == CliMode::SingleFile { " (default: 6_0)" } else { "" },
    )
}

fn option_value<'a, I>(name: &str, rest: &mut I) -> Result<&'a str>
where
    I: Iterator<Item = &'a String>,
{
    rest.next()
        .map(String::as_str)
        .ok_or_else(|| Error::UsageError(format!("Option '{}' expects a value", name)))
}

/// Parse `args` (program name excluded)
///
/// # Errors
///
/// `UsageError` for unknown options, missing option values and wrong
/// positional counts. Parse errors of the target, kind and shader model are
/// returned as their own variants.
pub fn parse_args(mode: CliMode, args: &[String]) -> Result<ParsedArgs> {
    let mut options = CliOptions::default();
    let mut shader_model: Option<ShaderModel> = None;
    let mut source_extension: Option<String> = None;
    let mut positionals: Vec<&str> = Vec::new();

    let mut iter = args.iter();
    let mut options_done = false;
    while let Some(arg) = iter.next() {
        if options_done || !arg.starts_with('-') || arg == "-" {
            positionals.push(arg);
            continue;
        }
        match arg.as_str() {
            "--" => options_done = true,
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            "-v" | "--verbose" => options.log_level = LogSeverity::Debug,
            "-q" | "--quiet" => options.log_level = LogSeverity::Warn,
            "--capture-output" => options.capture_output = true,
            "--dry-run" => options.dry_run = true,
            "--shader-model" => {
                shader_model = Some(option_value(arg, &mut iter)?.parse()?);
            }
            "--ext" => {
                source_extension = Some(option_value(arg, &mut iter)?.to_string());
            }
            "--cross-compiler" => {
                options.cross_compiler = Some(PathBuf::from(option_value(arg, &mut iter)?));
            }
            "--dxc" => {
                options.platform_compiler = Some(PathBuf::from(option_value(arg, &mut iter)?));
            }
            other => return Err(Error::UsageError(format!("Unknown option '{}'", other))),
        }
    }

    let mut batch = match mode {
        CliMode::SingleFile => single_file_config(&positionals, shader_model)?,
        CliMode::Directory => directory_config(&positionals, shader_model)?,
    };
    if let Some(extension) = source_extension {
        batch = batch.with_source_extension(extension);
    }

    Ok(ParsedArgs::Run(CliRequest { batch, options }))
}

fn single_file_config(positionals: &[&str], shader_model: Option<ShaderModel>) -> Result<BatchConfig> {
    let (input, target, kind, output) = match positionals {
        [input, target, output] => (*input, *target, None, *output),
        [input, target, kind, output] => (*input, *target, Some(*kind), *output),
        _ => {
            return Err(Error::UsageError(format!(
                "Expected 3 or 4 arguments, got {}", positionals.len()
            )))
        }
    };

    let target_format: TargetFormat = target.parse()?;
    let shader_kind = match kind {
        Some(kind) => kind.parse()?,
        None => ShaderKind::default(),
    };

    let config = BatchConfig::new(input, shader_kind, target_format, output);
    Ok(config.with_shader_model(shader_model.unwrap_or_default()))
}

fn directory_config(positionals: &[&str], shader_model: Option<ShaderModel>) -> Result<BatchConfig> {
    let [input, target, output] = positionals else {
        return Err(Error::UsageError(format!(
            "Expected 3 arguments, got {}", positionals.len()
        )));
    };

    let target_format: TargetFormat = target.parse()?;
    if target_format.requires_shader_model() {
        return Err(Error::UsageError(format!(
            "Target '{}' is not supported in directory mode", target_format
        )));
    }

    let config = BatchConfig::new(*input, ShaderKind::VertexPixelPair, target_format, *output);
    Ok(match shader_model {
        Some(shader_model) => config.with_shader_model(shader_model),
        None => config,
    })
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
