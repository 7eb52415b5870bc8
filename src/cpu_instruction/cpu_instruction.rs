use super::microcode::Result as MicrocodeResult;
use crate::memory::RAM as Memory;
use crate::operands::*;
use crate::registers::Registers;
use std::fmt;

pub type BoxedMicrocode =
    Box<dyn Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>>;

pub struct CPUInstruction {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub operand_layout: OperandLayout,
    pub microcode: BoxedMicrocode,
}

impl CPUInstruction {
    pub fn new(
        address: usize,
        opcode: u8,
        mnemonic: &str,
        operand_layout: OperandLayout,
        microcode: impl Fn(&mut Memory, &mut Registers, &CPUInstruction) -> MicrocodeResult<LogLine>
            + 'static,
    ) -> CPUInstruction {
        CPUInstruction {
            address,
            opcode,
            mnemonic: mnemonic.to_owned(),
            operand_layout,
            microcode: Box::new(microcode),
        }
    }

    pub fn execute(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
    ) -> MicrocodeResult<LogLine> {
        (self.microcode)(memory, registers, self)
    }

    /*
     * size of the instruction in memory, the instruction byte itself plus its
     * operands
     */
    pub fn size(&self) -> usize {
        1 + self.operand_layout.operand_count()
    }
}

fn format_bytes(opcode: u8, operands: &[u8]) -> String {
    let mut bytes = vec![opcode];
    bytes.extend_from_slice(operands);

    format!(
        "({})",
        bytes
            .iter()
            .fold(String::new(), |acc, s| format!("{} {:02x}", acc, s))
            .trim()
    )
}

impl fmt::Display for CPUInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte_sequence = format_bytes(self.opcode, &self.operand_layout.get_operands());

        write!(
            f,
            "#0x{:02X}: {: <13}{: <4} {: <12}",
            self.address,
            byte_sequence,
            self.mnemonic,
            format!("{}", self.operand_layout)
        )
    }
}

/*
 * Signal
 * what the engine has to do with the outside world after an instruction.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Signal {
    Print(u8),
    Halt,
}

#[derive(Debug)]
pub struct LogLine {
    pub address: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub resolution: OperandResolution,
    pub outcome: String,
    pub signal: Option<Signal>,
}

impl LogLine {
    pub fn new(
        cpu_instruction: &CPUInstruction,
        resolution: OperandResolution,
        outcome: String,
    ) -> LogLine {
        LogLine {
            address: cpu_instruction.address,
            opcode: cpu_instruction.opcode,
            mnemonic: cpu_instruction.mnemonic.clone(),
            resolution,
            outcome,
            signal: None,
        }
    }

    pub fn with_signal(mut self, signal: Signal) -> LogLine {
        self.signal = Some(signal);
        self
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let byte_sequence = format_bytes(self.opcode, &self.resolution.operands);

        write!(
            f,
            "#0x{:02X}: {: <13}{: <4} {}  {}",
            self.address, byte_sequence, self.mnemonic, self.resolution, self.outcome
        )
    }
}
