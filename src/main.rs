use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use macrokey::{
    lookup_keycode, parse_script, read_script_lines, Engine, InputSignal, Interpreter, MouseButton,
    Synthesizer,
};

/// Prints each synthesized action instead of posting it to the OS. The
/// real capture/synthesis backends live outside this crate; the simulator
/// drives the same engine API they would.
struct ConsoleSynthesizer;

impl Synthesizer for ConsoleSynthesizer {
    fn mouse_move(&mut self, x: i32, y: i32, duration: f32) {
        println!("synth: mouse move -> ({}, {}) over {}s", x, y, duration);
    }

    fn mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {
        println!("synth: mouse down {:?} at ({}, {})", button, x, y);
    }

    fn mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {
        println!("synth: mouse up {:?} at ({}, {})", button, x, y);
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let dump_json = args.iter().any(|a| a == "--dump-json");
    let path = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("script.msr");

    // An unreadable script is fatal at startup; never dispatch without one.
    let lines = match read_script_lines(path) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("{} (`{}`)", e, path);
            return ExitCode::FAILURE;
        }
    };
    let line_refs: Vec<&str> = lines.iter().map(String::as_str).collect();

    let mut interp = Interpreter::new();
    let script = parse_script(&line_refs, &mut interp);

    if dump_json {
        match serde_json::to_string_pretty(&script) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize script: {}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    print!("{}", script.to_script_text());
    println!("{}", interp.dump_vars());

    let mut engine = Engine::new(script, interp);
    match run_simulator(&mut engine) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("simulator error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Interactive driver standing in for the OS event tap and run loop:
/// `press` feeds a key-down through dispatch, `tick` drains to the console
/// synthesizer on its own cadence.
fn run_simulator(engine: &mut Engine) -> io::Result<()> {
    let mut synth = ConsoleSynthesizer;
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let Some(words) = shlex::split(line.trim()) else {
            eprintln!("unbalanced quoting");
            continue;
        };
        let Some((cmd, rest)) = words.split_first() else {
            continue;
        };

        match cmd.as_str() {
            "press" => {
                let Some(label) = rest.first() else {
                    eprintln!("usage: press <KeyLabel>");
                    continue;
                };
                match lookup_keycode(label) {
                    Some(code) => {
                        let fired = engine.handle_signal(InputSignal::KeyDown(code));
                        println!(
                            "{} hotkey(s) fired, {} event(s) pending",
                            fired,
                            engine.pending_events()
                        );
                    }
                    None => eprintln!("unknown key label `{}`", label),
                }
            }
            "tick" => {
                let n = rest
                    .first()
                    .and_then(|a| a.parse::<usize>().ok())
                    .unwrap_or(1);
                for _ in 0..n {
                    if !engine.tick(&mut synth) {
                        println!("queue drained");
                        break;
                    }
                }
            }
            "vars" => println!("{}", engine.interpreter().dump_vars()),
            "script" => print!("{}", engine.script().to_script_text()),
            "json" => match serde_json::to_string_pretty(engine.script()) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("failed to serialize script: {}", e),
            },
            "eval" => match engine.interpreter().eval(&rest.join(" ")) {
                Ok(v) => println!("{}", v),
                Err(e) => eprintln!("{}", e),
            },
            "quit" | "exit" => break,
            _ => eprintln!("commands: press <KeyLabel> | tick [n] | vars | script | json | eval <expr> | quit"),
        }
    }

    engine.reset();
    Ok(())
}
