//! academy-md CLI - download Academy modules as Markdown.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use academy_md::{export_module, url_utils, Error, Options, Session};

#[derive(Parser)]
#[command(name = "academy-md")]
#[command(version)]
#[command(about = "Download HackTheBox Academy modules as Markdown", long_about = None)]
struct Cli {
    /// Module URL (any page of the module), or a local file with one module URL per line
    #[arg(short, long, value_name = "URL|FILE")]
    module: String,

    /// Session cookies, as a "name=value; name=value" string
    #[arg(short, long, value_name = "COOKIES")]
    cookies: String,

    /// Download images into this directory; they stay remote links when unset
    #[arg(short = 'i', long = "images", value_name = "DIR")]
    image_dir: Option<PathBuf>,

    /// Directory to store the Markdown files
    #[arg(short = 'o', long = "output", value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let module_urls = match module_targets(&cli.module) {
        Ok(urls) => urls,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(1);
        }
    };

    println!("Authenticating with HackTheBox...");
    let session = match Session::authenticate(&cli.cookies) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Failed authenticating to HackTheBox: {err}");
            return ExitCode::from(1);
        }
    };

    let options = Options {
        output_dir: cli.output_dir,
        image_dir: cli.image_dir,
    };

    // A failing module does not stop the others; the first failure decides
    // the exit code.
    let mut first_failure: Option<u8> = None;
    for module_url in &module_urls {
        println!("Downloading module {module_url}");
        match export_module(&session, module_url, &options) {
            Ok(path) => println!("Finished downloading module to {}", path.display()),
            Err(err) => {
                eprintln!("Failed downloading module {module_url}: {err}");
                first_failure.get_or_insert(exit_code(&err));
            }
        }
    }

    match first_failure {
        Some(code) => ExitCode::from(code),
        None => ExitCode::SUCCESS,
    }
}

/// Resolves the `-m` argument into module URLs.
///
/// A value that already looks like a module URL is used as-is; anything
/// else is treated as a file holding one URL per line, keeping only the
/// lines that are module URLs.
fn module_targets(target: &str) -> Result<Vec<String>, String> {
    if url_utils::is_module_url(target) {
        return Ok(vec![target.trim().to_string()]);
    }

    let text = fs::read_to_string(target)
        .map_err(|err| format!("cannot read module list {target}: {err}"))?;
    let urls: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| url_utils::is_module_url(line))
        .map(ToString::to_string)
        .collect();

    if urls.is_empty() {
        return Err(format!("no module URLs found in {target}"));
    }
    Ok(urls)
}

/// Maps an error to the process exit code of its category.
fn exit_code(err: &Error) -> u8 {
    match err {
        Error::AuthenticationFailed(_) | Error::Client(_) => 1,
        Error::Write { .. } => 3,
        Error::ImageDir { .. } => 4,
        _ => 2,
    }
}
