mod common;
use basic::mach::{Runtime, Val};
use common::*;

#[test]
fn test_hi_bye() {
    let mut r = runtime("10 PRINT \"HI\"\n20 PRINT \"BYE\"\n");
    assert_eq!(exec(&mut r), "HI\nBYE\n");
}

#[test]
fn test_goto_missing_line() {
    let mut r = runtime("10 GOTO 99\n");
    assert_eq!(exec(&mut r), "UNDEFINED LINE IN 10; LINE 99 NOT FOUND\n");
}

#[test]
fn test_goto_missing_line_after_output() {
    let mut r = runtime("10 PRINT \"A\"\n20 GOTO 15\n30 PRINT \"B\"\n");
    assert_eq!(exec(&mut r), "A\nUNDEFINED LINE IN 20; LINE 15 NOT FOUND\n");
}

#[test]
fn test_endless_goto_loop() {
    let mut r = runtime("10 LET A=5\n20 PRINT \"X=\";A\n30 GOTO 10\n");
    assert_eq!(
        exec_n(&mut r, 9),
        "X=5\nX=5\nX=5\n\n9 steps exceeded.\n"
    );
    assert!(r.is_running());
}

#[test]
fn test_let_then_print() {
    let mut r = runtime("10 LET A=-42\n20 LET B=\"WORD\"\n30 PRINT A\n40 PRINT B\n");
    assert_eq!(exec(&mut r), "-42\nWORD\n");
    assert_eq!(r.vars().fetch("A"), Ok(Val::Integer(-42)));
    assert_eq!(r.vars().fetch("B"), Ok(Val::String("WORD".into())));
}

#[test]
fn test_reassignment_replaces_value() {
    let mut r = runtime("10 LET A=1\n20 LET A=\"ONE\"\n30 PRINT A\n");
    assert_eq!(exec(&mut r), "ONE\n");
}

#[test]
fn test_unassigned_variable() {
    let mut r = runtime("10 PRINT \"V=\";V\n20 PRINT \"AFTER\"\n");
    assert_eq!(exec(&mut r), "V=UNDEFINED VARIABLE IN 10; `V`\n");
    let mut r = runtime("10 LET V=7\n20 PRINT \"V=\";V\n");
    assert_eq!(exec(&mut r), "V=7\n");
}

#[test]
fn test_semicolon_suppresses_newline() {
    let mut r = runtime("10 PRINT \"A\";\n20 PRINT \"B\";\n30 PRINT \"C\"\n40 PRINT \"D\"\n");
    assert_eq!(exec(&mut r), "ABC\nD\n");
}

#[test]
fn test_tab() {
    let mut r = runtime("10 PRINT \"[\";TAB(4);\"]\"\n20 PRINT TAB(0);\"|\"\n");
    assert_eq!(exec(&mut r), "[    ]\n|\n");
}

#[test]
fn test_lines_run_in_number_order() {
    let mut r = runtime("30 PRINT \"C\"\n10 PRINT \"A\"\n20 PRINT \"B\"\n");
    assert_eq!(exec(&mut r), "A\nB\nC\n");
}

#[test]
fn test_redefined_line_keeps_last() {
    let mut r = runtime("10 PRINT \"FIRST\"\n10 PRINT \"SECOND\"\n");
    assert_eq!(r.program().len(), 1);
    assert_eq!(exec(&mut r), "SECOND\n");
}

#[test]
fn test_goto_forward_and_back() {
    let mut r = runtime(
        "10 GOTO 40\n\
         20 PRINT \"TWO\"\n\
         30 GOTO 60\n\
         40 PRINT \"ONE\"\n\
         50 GOTO 20\n\
         60 PRINT \"THREE\"\n",
    );
    assert_eq!(exec(&mut r), "ONE\nTWO\nTHREE\n");
}

#[test]
fn test_goto_negative_line() {
    let mut r = runtime("10 GOTO -10\n");
    assert_eq!(exec(&mut r), "UNDEFINED LINE IN 10; LINE -10 NOT FOUND\n");
}

#[test]
fn test_print_alone_is_ignored() {
    let mut r = runtime("10 PRINT\n20 PRINT \"X\"\n");
    assert_eq!(r.program().len(), 1);
    assert_eq!(exec(&mut r), "X\n");
}

#[test]
fn test_second_run_continues_from_pc() {
    let mut r = runtime("10 PRINT \"ONCE\"\n");
    assert_eq!(exec(&mut r), "ONCE\n");
    assert_eq!(exec(&mut r), "");
    r.set_pc(10).unwrap();
    assert_eq!(exec(&mut r), "ONCE\n");
}

#[test]
fn test_entering_a_line_rebuilds_index() {
    let mut r = runtime("20 PRINT \"B\"\n");
    assert_eq!(exec(&mut r), "B\n");
    r.enter("10 PRINT \"A\"").unwrap();
    assert_eq!(exec(&mut r), "A\nB\n");
}

#[test]
fn test_run_to_writer() {
    let mut r = runtime("10 LET N=3\n20 PRINT \"N\";TAB(2);\"=\";N;\n30 PRINT \"!\"\n");
    let mut out: Vec<u8> = vec![];
    r.run(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "N  =3!\n");
}

#[test]
fn test_run_error_keeps_partial_output() {
    let mut r = Runtime::new();
    r.enter("10 PRINT \"PART\";X").unwrap();
    let mut out: Vec<u8> = vec![];
    let e = r.run(&mut out).unwrap_err();
    assert_eq!(e.to_string(), "UNDEFINED VARIABLE IN 10; `X`");
    assert_eq!(out, b"PART");
}
