use super::*;

pub fn add(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let reg_a = resolution.register_a()?;
    let reg_b = resolution.register_b()?;

    alu::apply(cpu_instruction.opcode, reg_a, reg_b, registers)?;
    registers.command_pointer += 1 + resolution.operands.len();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[R{}=0x{:02x}]", reg_a, registers.get(reg_a)?),
    ))
}
