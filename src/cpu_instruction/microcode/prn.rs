use super::*;

pub fn prn(
    _memory: &mut Memory,
    registers: &mut Registers,
    cpu_instruction: &CPUInstruction,
) -> Result<LogLine> {
    let resolution = cpu_instruction.operand_layout.solve()?;
    let source = resolution.register_a()?;
    let value = registers.get(source)?;

    registers.command_pointer += 1 + resolution.operands.len();

    Ok(LogLine::new(
        cpu_instruction,
        resolution,
        format!("[R{}=0x{:02x}]", source, value),
    )
    .with_signal(Signal::Print(value)))
}
