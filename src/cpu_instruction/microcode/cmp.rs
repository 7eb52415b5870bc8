use super::*;

pub fn cmp(
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
        format!("[FL={}]", registers.format_status()),
    ))
}
