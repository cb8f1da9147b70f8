use basic::lang::{ast::*, parse, ErrorCode, Line};

fn listed(s: &str) -> String {
    match parse(s) {
        Ok(Some(line)) => line.to_string(),
        Ok(None) => String::new(),
        Err(e) => e.to_string(),
    }
}

#[test]
fn test_canonical_forms() {
    assert_eq!(listed(r#"10 PRINT "X=";A"#), r#"10 PRINT"X=";A"#);
    assert_eq!(listed("20 PRINT A;B;"), "20 PRINT A;B;");
    assert_eq!(listed(r#"30 PRINT"A";TAB(2);"B""#), r#"30 PRINT"A  B""#);
    assert_eq!(listed("40 LET A = 7"), "40 LET A=7");
    assert_eq!(listed(r#"50 LET S="HELLO""#), r#"50 LET S="HELLO""#);
    assert_eq!(listed("60 GOTO 10"), "60 GOTO 10");
}

#[test]
fn test_blank_lines() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse("10 PRINT"), Ok(None));
}

#[test]
fn test_error_messages() {
    assert_eq!(listed("PRINT"), "MISSING LINE NUMBER");
    assert_eq!(
        listed("1O PRINT \"X\""),
        "BAD LINE NUMBER; `1O`: invalid digit found in string"
    );
    assert_eq!(listed("10 REM HI"), "UNKNOWN INSTRUCTION IN 10; `REM` `HI`");
    assert_eq!(listed("10 LET A"), "SYNTAX ERROR IN 10; INVALID LET STATEMENT");
    assert_eq!(listed("10 PRINT TAB()"), "SYNTAX ERROR IN 10; INCOMPLETE TAB");
    assert_eq!(
        listed("10 PRINT CHR(65)"),
        "ILLEGAL FUNCTION CALL IN 10; UNHANDLED FUNCTION `CHR(65)`"
    );
}

#[test]
fn test_error_codes() {
    let code = |s: &str| parse(s).err().map(|e| e.code());
    assert_eq!(code("10 LET A=99999999999"), Some(ErrorCode::Overflow));
    assert_eq!(code("10 LET A=X"), Some(ErrorCode::SyntaxError));
    assert_eq!(code("10 GOTO X"), Some(ErrorCode::BadLineNumber));
    assert_eq!(code("10 END"), Some(ErrorCode::UnknownInstruction));
}

#[test]
fn test_statement_structure() {
    let line = Line::from_str(r#"10 PRINT TAB(1);"A";B;"C";"#).unwrap().unwrap();
    assert_eq!(line.number(), 10);
    assert_eq!(
        line.statement(),
        &Statement::Print(
            vec![
                Expression::String(" A".into()),
                Expression::Var("B".into()),
                Expression::String("C".into()),
            ],
            true
        )
    );
}
