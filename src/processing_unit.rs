use super::cpu_instruction::microcode;
use super::cpu_instruction::{CPUInstruction, LogLine, MicrocodeError, Signal};
use super::memory::RAM as Memory;
use super::memory::{AddressableIO, MemoryError};
use super::operands::OperandLayout;
use super::registers::Registers;
use std::error;
use std::fmt;
use std::io::{self, Write};

#[derive(Debug)]
pub enum ExecutionError {
    UnknownOpcode { opcode: u8, address: usize },
    Microcode { address: usize, error: MicrocodeError },
    Memory(MemoryError),
    Output(io::Error),
    Halted,
}

pub type Result<T> = std::result::Result<T, ExecutionError>;

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExecutionError::UnknownOpcode { opcode, address } => write!(
                f,
                "unknown instruction 0b{:08b} (0x{:02x}) at address #0x{:02X}",
                opcode, opcode, address
            ),
            ExecutionError::Microcode { address, error } => {
                write!(f, "instruction at address #0x{:02X} failed: {}", address, error)
            }
            ExecutionError::Memory(e) => write!(f, "memory error while fetching: {}", e),
            ExecutionError::Output(e) => write!(f, "could not write output: {}", e),
            ExecutionError::Halted => write!(f, "the processor is halted"),
        }
    }
}

impl error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ExecutionError::Microcode { error, .. } => Some(error),
            ExecutionError::Memory(e) => Some(e),
            ExecutionError::Output(e) => Some(e),
            _ => None,
        }
    }
}

impl std::convert::From<MemoryError> for ExecutionError {
    fn from(err: MemoryError) -> ExecutionError {
        ExecutionError::Memory(err)
    }
}

impl std::convert::From<io::Error> for ExecutionError {
    fn from(err: io::Error) -> ExecutionError {
        ExecutionError::Output(err)
    }
}

fn read_operands<const N: usize>(address: usize, memory: &Memory) -> Result<[u8; N]> {
    let mut operands = [0x00; N];
    operands.copy_from_slice(&memory.read(address + 1, N)?);

    Ok(operands)
}

/*
 * resolve_opcode
 * The two highest bits of the opcode are the operand count, they are part of
 * the match so an opcode with a wrong operand count is unknown.
 */
pub fn resolve_opcode(address: usize, opcode: u8, memory: &Memory) -> Result<CPUInstruction> {
    let cpu_instruction = match opcode {
        0b0000_0001 => CPUInstruction::new(address, opcode, "HLT", OperandLayout::Implied, microcode::hlt),
        0b0001_0001 => CPUInstruction::new(address, opcode, "RET", OperandLayout::Implied, microcode::ret),
        0b0100_0101 => CPUInstruction::new(address, opcode, "PUSH", OperandLayout::Register(read_operands(address, memory)?), microcode::push),
        0b0100_0110 => CPUInstruction::new(address, opcode, "POP", OperandLayout::Register(read_operands(address, memory)?), microcode::pop),
        0b0100_0111 => CPUInstruction::new(address, opcode, "PRN", OperandLayout::Register(read_operands(address, memory)?), microcode::prn),
        0b0101_0000 => CPUInstruction::new(address, opcode, "CALL", OperandLayout::Register(read_operands(address, memory)?), microcode::call),
        0b0101_0100 => CPUInstruction::new(address, opcode, "JMP", OperandLayout::Register(read_operands(address, memory)?), microcode::jmp),
        0b0101_0101 => CPUInstruction::new(address, opcode, "JEQ", OperandLayout::Register(read_operands(address, memory)?), microcode::jeq),
        0b0101_0110 => CPUInstruction::new(address, opcode, "JNE", OperandLayout::Register(read_operands(address, memory)?), microcode::jne),
        0b1000_0010 => CPUInstruction::new(address, opcode, "LDI", OperandLayout::RegisterImmediate(read_operands(address, memory)?), microcode::ldi),
        0b1010_0000 => CPUInstruction::new(address, opcode, "ADD", OperandLayout::RegisterPair(read_operands(address, memory)?), microcode::add),
        0b1010_0010 => CPUInstruction::new(address, opcode, "MUL", OperandLayout::RegisterPair(read_operands(address, memory)?), microcode::mul),
        0b1010_0111 => CPUInstruction::new(address, opcode, "CMP", OperandLayout::RegisterPair(read_operands(address, memory)?), microcode::cmp),
        _ => return Err(ExecutionError::UnknownOpcode { opcode, address }),
    };

    Ok(cpu_instruction)
}

/*
 * execute_step
 * fetch, decode and execute the instruction pointed by the command pointer.
 */
pub fn execute_step(registers: &mut Registers, memory: &mut Memory) -> Result<LogLine> {
    let address = registers.command_pointer;
    let opcode = memory.read(address, 1)?[0];
    registers.instruction_register = opcode;
    let cpu_instruction = resolve_opcode(address, opcode, memory)?;

    cpu_instruction
        .execute(memory, registers)
        .map_err(|error| ExecutionError::Microcode { address, error })
}

/*
 * disassemble
 * decode the instructions in [start; end[ without executing them. Bytes that
 * are not a known instruction are shown as data.
 */
pub fn disassemble(start: usize, end: usize, memory: &Memory) -> Result<Vec<String>> {
    let mut output: Vec<String> = vec![];
    let mut address = start;

    while address < end {
        let opcode = memory.read(address, 1)?[0];
        match resolve_opcode(address, opcode, memory) {
            Ok(cpu_instruction) => {
                output.push(format!("{}", cpu_instruction).trim_end().to_owned());
                address += cpu_instruction.size();
            }
            Err(ExecutionError::UnknownOpcode { .. }) | Err(ExecutionError::Memory(_)) => {
                output.push(format!("#0x{:02X}: ({:02x})         ???", address, opcode));
                address += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(output)
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum CpuState {
    Running,
    Halted,
}

/*
 * Cpu
 * owns the memory, the registers and the output sink PRN writes to. It runs
 * the fetch-decode-execute cycle until a HLT instruction or a fault.
 */
pub struct Cpu<W: Write> {
    pub memory: Memory,
    pub registers: Registers,
    state: CpuState,
    output: W,
}

impl<W: Write> Cpu<W> {
    pub fn new(output: W) -> Cpu<W> {
        Cpu {
            memory: Memory::default(),
            registers: Registers::default(),
            state: CpuState::Running,
            output,
        }
    }

    /*
     * copy a program image in memory starting at address 0
     */
    pub fn load(&mut self, program: &[u8]) -> std::result::Result<(), MemoryError> {
        self.memory.write(0x00, program)
    }

    pub fn state(&self) -> CpuState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == CpuState::Running
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn step(&mut self) -> Result<LogLine> {
        if !self.is_running() {
            return Err(ExecutionError::Halted);
        }

        let log_line = execute_step(&mut self.registers, &mut self.memory)?;

        match log_line.signal {
            Some(Signal::Print(value)) => writeln!(self.output, "{}", value)?,
            Some(Signal::Halt) => self.state = CpuState::Halted,
            None => {}
        }

        Ok(log_line)
    }

    /*
     * run until halted, every executed instruction is handed to the observer.
     * Returns the number of executed instructions.
     */
    pub fn run_with(&mut self, mut observer: impl FnMut(&LogLine)) -> Result<usize> {
        let mut count: usize = 0;

        while self.is_running() {
            let log_line = self.step()?;
            observer(&log_line);
            count += 1;
        }
        self.output.flush()?;

        Ok(count)
    }

    pub fn run(&mut self) -> Result<usize> {
        self.run_with(|_| {})
    }
}
