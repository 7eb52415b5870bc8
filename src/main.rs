/*
 * This is the CLI frontend for the LS-8 library.
 */
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use ansi_term::Colour;
use anyhow::{bail, Context, Result};
use clap::Parser;

use ls8::loader::{self, LoadError};
use ls8::memory::hexdump;
use ls8::{disassemble, Cpu, VERSION};

/// LS-8 emulator
/// Load a program written as one binary literal per line and run it until it
/// halts. PRN instructions print on the standard output.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Program file location
    program: PathBuf,

    /// Print every executed instruction on the standard error
    #[arg(short, long)]
    trace: bool,

    /// Print the disassembled program and exit without running it
    #[arg(short, long)]
    disassemble: bool,

    /// Dump the memory content once the program has halted
    #[arg(short = 'm', long)]
    dump_memory: bool,

    /// Stop with an error after this many instructions
    #[arg(long)]
    max_steps: Option<usize>,
}

fn main() {
    let parameters = CommandLineArguments::parse();

    if let Err(e) = run(&parameters) {
        print_err(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(parameters: &CommandLineArguments) -> Result<()> {
    let program = match loader::load_file(&parameters.program) {
        Ok(program) => program,
        Err(LoadError::Io(e)) if e.kind() == ErrorKind::NotFound => bail!(
            "ls8: {} file was not found",
            parameters.program.display()
        ),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("could not load '{}'", parameters.program.display())
            })
        }
    };

    let mut cpu = Cpu::new(io::stdout());
    cpu.load(&program)?;

    if parameters.disassemble {
        println!(
            "{}",
            Colour::Green.paint(format!("LS-8 version {}, {} bytes", VERSION, program.len()))
        );
        for line in disassemble(0x00, program.len(), &cpu.memory)? {
            println!("{}", line);
        }

        return Ok(());
    }

    let interrupted = Arc::new(AtomicBool::new(false));
    let rmtint = interrupted.clone();
    ctrlc::set_handler(move || {
        rmtint.store(true, Ordering::SeqCst);
    })
    .context("could not set the CTRL-C handler")?;

    let mut steps: usize = 0;
    while cpu.is_running() {
        if interrupted.load(Ordering::Relaxed) {
            bail!("execution interrupted by CTRL+C after {} instructions", steps);
        }
        if parameters.max_steps.is_some_and(|max| steps >= max) {
            bail!("program still running after {} instructions", steps);
        }

        let log_line = cpu
            .step()
            .with_context(|| format!("{:?}", cpu.registers))?;
        if parameters.trace {
            eprintln!("{}", Colour::Fixed(240).paint(format!("{}", log_line)));
        }
        steps += 1;
    }

    if parameters.trace {
        eprintln!(
            "{}",
            Colour::Green.paint(format!("Halted after {} cpu instructions.", steps))
        );
    }
    if parameters.dump_memory {
        for line in hexdump(&cpu.memory)? {
            eprintln!("{}", line);
        }
    }

    Ok(())
}

fn print_err(msg: &str) {
    eprintln!("{}: {}", Colour::Red.paint("Error"), msg);
}
