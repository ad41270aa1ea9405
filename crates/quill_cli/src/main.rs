use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use quill_forms::serialization::{host_codegen, json};
use quill_host::{MemoryHost, UserAction};
use quill_runtime::FormSession;

fn usage() -> ExitCode {
    eprintln!("Usage: quill <form.json> [--script <actions.json>] [--emit-code]");
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return usage();
    }

    let spec_path = PathBuf::from(&args[1]);
    let mut script_path: Option<PathBuf> = None;
    let mut emit_code = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--script" => {
                let Some(path) = args.get(i + 1) else {
                    return usage();
                };
                script_path = Some(PathBuf::from(path));
                i += 2;
            }
            "--emit-code" => {
                emit_code = true;
                i += 1;
            }
            other => {
                eprintln!("Error: unknown argument '{other}'");
                return usage();
            }
        }
    }

    let spec = match json::load_document(&spec_path) {
        Ok(spec) => spec,
        Err(e) => {
            eprintln!("Error loading {}: {e}", spec_path.display());
            return ExitCode::FAILURE;
        }
    };

    if emit_code {
        print!("{}", host_codegen::generate_host_helper(&spec));
        return ExitCode::SUCCESS;
    }

    let form_name = spec.name.clone();
    let mut session = FormSession::new(MemoryHost::new());
    if let Err(e) = session.materialize(spec) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    if let Some(path) = script_path {
        let actions: Vec<UserAction> = match fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
        {
            Ok(actions) => actions,
            Err(e) => {
                eprintln!("Error loading {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = session.host_mut().queue_script(&form_name, actions) {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let result = match session.show_form_modal(&form_name) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
