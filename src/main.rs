use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use chip8vm::config::{Config, Keymap};
use chip8vm::display::MonoTermDisplay;
use chip8vm::environment::Environment;
use chip8vm::input::TermInput;
use chip8vm::interpreter::Chip8Interpreter;
use chip8vm::screen::{SCREEN_HEIGHT, SCREEN_WIDTH};
use chip8vm::sound::{Mute, SimpleBeep, Sound};
use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Runs a CHIP-8 program in the terminal")]
struct Opt {
    /// Program image to load at 0x200
    rom: PathBuf,

    /// Instructions executed per frame
    #[arg(long = "ipf", default_value_t = 10)]
    instructions_per_frame: u32,

    /// Frames per second; the timers tick once a frame
    #[arg(long = "hz", default_value_t = 60)]
    frame_rate_hz: u32,

    /// Seed for the random number instruction
    #[arg(long)]
    seed: Option<u64>,

    /// Which keys on the host keyboard make up the hex keypad
    #[arg(long, value_enum, default_value_t = Keymap::Conventional)]
    keymap: Keymap,

    /// Stop after this many frames
    #[arg(long)]
    frames: Option<u64>,

    /// Don't beep
    #[arg(long)]
    mute: bool,

    /// Increase the level of verbosity. Can be used multiple times.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Write log messages here rather than to stderr
    #[arg(long)]
    log: Option<PathBuf>,
}

impl Opt {
    const fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "chip8vm=info,warn",
            2 => "chip8vm=debug,info",
            3..=u8::MAX => "chip8vm=trace,debug",
        }
    }

    fn filter_layer(&self) -> Result<EnvFilter, Box<dyn Error>> {
        // Parse log level from env, or infer from args
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(self.log_filter()))?;
        Ok(filter)
    }

    fn config(&self) -> Config {
        Config {
            instructions_per_frame: self.instructions_per_frame,
            frame_rate_hz: self.frame_rate_hz,
            seed: self.seed,
            keymap: self.keymap,
            max_frames: self.frames,
            mute: self.mute,
        }
    }
}

fn init_logging(opt: &Opt) -> Result<(), Box<dyn Error>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(opt.filter_layer()?)
        .with_ansi(false);
    match &opt.log {
        Some(path) => builder.with_writer(Mutex::new(File::create(path)?)).init(),
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::parse();
    init_logging(&opt)?;
    let config = opt.config();

    // load a program
    let mut interpreter = Chip8Interpreter::from_config(&config)?;
    let mut f = File::open(&opt.rom)?;
    interpreter.load_program_from(&mut f)?;
    info!(rom = %opt.rom.display(), "Starting");

    let result = {
        let mut display = MonoTermDisplay::new(SCREEN_WIDTH, SCREEN_HEIGHT)?;
        let mut input = TermInput::new()?;
        let mut beeper = SimpleBeep::new();
        let mut mute = Mute::new();
        let sound: &mut dyn Sound = if config.mute { &mut mute } else { &mut beeper };
        let mut env = Environment::new(interpreter, &mut display, &mut input, sound, config);
        env.run()
    };

    // shove some junk on stdout to stop the cli messing up the last frame
    for _ in 0..2 {
        println!();
    }
    match result {
        Ok(exit) => {
            info!(?exit, "Stopped");
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
