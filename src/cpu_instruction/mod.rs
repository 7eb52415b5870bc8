mod cpu_instruction;
pub mod microcode;

pub use self::cpu_instruction::{BoxedMicrocode, CPUInstruction, LogLine, Signal};
pub use microcode::MicrocodeError;
