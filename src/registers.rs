use std::cmp::Ordering;
use std::error;
use std::fmt;

use super::memory::{AddressableIO, MemoryError};
use super::memory::RAM as Memory;
/*
 * LS-8 registers
 * R0 to R6 are 8 bits general purpose registers.
 * R7 is the stack pointer, set at 0xF4 at start. The stack grows downward.
 * flags register:
 * bit 2: Less than flag
 * bit 1: Greater than flag
 * bit 0: Equal flag
 *
 * command pointer: address of the next instruction to fetch
 * instruction register: last fetched instruction byte
 */
pub const REGISTER_COUNT: usize = 8;
pub const STACK_POINTER: u8 = 7;
pub const STACK_INIT_ADDR: u8 = 0xf4;

pub const FLAG_EQUAL: u8 = 0b00000001;
pub const FLAG_GREATER_THAN: u8 = 0b00000010;
pub const FLAG_LESS_THAN: u8 = 0b00000100;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum RegisterError {
    InvalidIndex(u8),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RegisterError::InvalidIndex(index) => write!(
                f,
                "register index {} out of bounds, only R0 to R{} exist",
                index,
                REGISTER_COUNT - 1
            ),
        }
    }
}

impl error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

pub struct Registers {
    general: [u8; REGISTER_COUNT],
    pub command_pointer: usize,
    pub instruction_register: u8,
    pub flags_register: u8,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new(0x00)
    }
}

impl Registers {
    pub fn new(init_address: usize) -> Registers {
        let mut general = [0x00; REGISTER_COUNT];
        general[STACK_POINTER as usize] = STACK_INIT_ADDR;

        Registers {
            general,
            command_pointer: init_address,
            instruction_register: 0x00,
            flags_register: 0x00,
        }
    }

    pub fn get(&self, index: u8) -> Result<u8, RegisterError> {
        self.general
            .get(index as usize)
            .copied()
            .ok_or(RegisterError::InvalidIndex(index))
    }

    pub fn set(&mut self, index: u8, byte: u8) -> Result<(), RegisterError> {
        let register = self
            .general
            .get_mut(index as usize)
            .ok_or(RegisterError::InvalidIndex(index))?;
        *register = byte;

        Ok(())
    }

    pub fn stack_pointer(&self) -> u8 {
        self.general[STACK_POINTER as usize]
    }

    pub fn set_stack_pointer(&mut self, sp: u8) {
        self.general[STACK_POINTER as usize] = sp;
    }

    /*
     * The stack pointer moves first when pushing and last when pulling. It is
     * left untouched when the move would leave the memory.
     */
    pub fn decrement_stack_pointer(&mut self) -> Result<u8, MemoryError> {
        let sp = self.stack_pointer();
        let next_sp = sp.checked_sub(1).ok_or(MemoryError::StackOverflow(sp))?;
        self.set_stack_pointer(next_sp);

        Ok(next_sp)
    }

    pub fn increment_stack_pointer(&mut self) -> Result<u8, MemoryError> {
        let sp = self.stack_pointer();
        let next_sp = sp.checked_add(1).ok_or(MemoryError::StackUnderflow(sp))?;
        self.set_stack_pointer(next_sp);

        Ok(next_sp)
    }

    pub fn stack_push(&mut self, memory: &mut Memory, byte: u8) -> Result<(), MemoryError> {
        let sp = self.decrement_stack_pointer()?;
        memory.write(sp as usize, &[byte])
    }

    pub fn stack_pull(&mut self, memory: &Memory) -> Result<u8, MemoryError> {
        let byte = memory.read(self.stack_pointer() as usize, 1)?[0];
        self.increment_stack_pointer()?;

        Ok(byte)
    }

    /*
     * The whole flags register is reassigned, exactly one bit is set after
     * any comparison.
     */
    pub fn set_comparison(&mut self, ordering: Ordering) {
        self.flags_register = match ordering {
            Ordering::Equal => FLAG_EQUAL,
            Ordering::Greater => FLAG_GREATER_THAN,
            Ordering::Less => FLAG_LESS_THAN,
        };
    }

    pub fn e_flag_is_set(&self) -> bool {
        self.flags_register & FLAG_EQUAL == FLAG_EQUAL
    }

    pub fn g_flag_is_set(&self) -> bool {
        self.flags_register & FLAG_GREATER_THAN == FLAG_GREATER_THAN
    }

    pub fn l_flag_is_set(&self) -> bool {
        self.flags_register & FLAG_LESS_THAN == FLAG_LESS_THAN
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}{}",
            if self.l_flag_is_set() { "L" } else { "l" },
            if self.g_flag_is_set() { "G" } else { "g" },
            if self.e_flag_is_set() { "E" } else { "e" },
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers [{} | CP:0x{:02x} IR:0x{:02x} | {}]",
            self.general
                .iter()
                .enumerate()
                .map(|(index, value)| format!("R{}:0x{:02x}", index, value))
                .collect::<Vec<String>>()
                .join(" "),
            self.command_pointer,
            self.instruction_register,
            self.format_status()
        )
    }
}
