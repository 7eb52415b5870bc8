use std::io::Write;

use ls8::loader::{load_file, parse_program, LoadError};
use ls8::Cpu;

const CALL_PROGRAM: &str = "# Demonstrate calls
10000010 # LDI R1,MULT2PRINT
00000001
00011000
10000010 # LDI R0,10
00000000
00001010
01010000 # CALL R1
00000001
10000010 # LDI R0,15
00000000
00001111
01010000 # CALL R1
00000001
10000010 # LDI R0,18
00000000
00010010
01010000 # CALL R1
00000001
10000010 # LDI R0,30
00000000
00011110
01010000 # CALL R1
00000001
00000001 # HLT
# MULT2PRINT (address 24):
10100000 # ADD R0,R0
00000000
00000000
01000111 # PRN R0
00000000
00010001 # RET
";

#[test]
fn run_call_program() {
    let program = parse_program(CALL_PROGRAM).unwrap();
    assert_eq!(30, program.len());

    let mut cpu = Cpu::new(Vec::new());
    cpu.load(&program).unwrap();
    cpu.run().unwrap();

    assert_eq!(0xf4, cpu.registers.stack_pointer());
    assert_eq!(
        "20\n30\n36\n60\n",
        String::from_utf8(cpu.into_output()).unwrap()
    );
}

#[test]
fn load_program_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(CALL_PROGRAM.as_bytes()).unwrap();

    let program = load_file(file.path()).unwrap();
    assert_eq!(&[0x82, 0x01, 0x18], &program[0..3]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_file(dir.path().join("missing.ls8"));

    assert!(matches!(
        result,
        Err(LoadError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound
    ));
}

#[test]
fn malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"10000010\nLDI R0\n").unwrap();

    let error = load_file(file.path()).unwrap_err();
    assert!(matches!(error, LoadError::Parse(_)));
    assert!(format!("{}", error).starts_with("malformed program:"));
}

fn run_demo(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join(name);
    let program = load_file(path).unwrap();
    let mut cpu = Cpu::new(Vec::new());
    cpu.load(&program).unwrap();
    cpu.run().unwrap();

    String::from_utf8(cpu.into_output()).unwrap()
}

#[test]
fn demo_programs() {
    assert_eq!("8\n", run_demo("print8.ls8"));
    assert_eq!("72\n", run_demo("mult.ls8"));
    assert_eq!("3\n2\n1\n", run_demo("stack.ls8"));
    assert_eq!("20\n30\n36\n60\n", run_demo("call.ls8"));
    assert_eq!("5\n4\n3\n2\n1\n0\n", run_demo("sctest.ls8"));
}
