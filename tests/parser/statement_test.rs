//! 文のパーサーテスト

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_variable_and_constant_declarations() {
    let stmts = statements(
        r#"
    x := 1;
    y : int = 2;
    z : float;
    W :: 3;
    V : int : 4;
    "#,
    );
    assert_eq!(stmts.len(), 5);

    match &stmts[0] {
        Statement::Declaration(Definition::Variable(var)) => {
            assert_eq!(var.name, "x");
            assert!(var.ty.is_none());
            assert!(var.value.is_some());
        }
        other => panic!("Expected variable, got {:?}", other),
    }
    match &stmts[1] {
        Statement::Declaration(Definition::Variable(var)) => {
            assert!(var.ty.is_some());
            assert!(var.value.is_some());
        }
        other => panic!("Expected variable, got {:?}", other),
    }
    match &stmts[2] {
        Statement::Declaration(Definition::Variable(var)) => assert!(var.value.is_none()),
        other => panic!("Expected variable, got {:?}", other),
    }
    assert!(matches!(
        &stmts[3],
        Statement::Declaration(Definition::Constant(Constant { ty: None, .. }))
    ));
    assert!(matches!(
        &stmts[4],
        Statement::Declaration(Definition::Constant(Constant { ty: Some(_), .. }))
    ));
}

#[test]
fn test_assignments() {
    let stmts = statements(
        r#"
    x = 1;
    p.x += 2;
    p.* = 3;
    a[i] -= 1;
    n : int *= 2;
    "#,
    );

    let ops: Vec<_> = stmts
        .iter()
        .map(|stmt| match stmt {
            Statement::Assignment(assign) => assign.op,
            other => panic!("Expected assignment, got {:?}", other),
        })
        .collect();
    assert_eq!(
        ops,
        vec![
            AssignOp::Assign,
            AssignOp::AddAssign,
            AssignOp::Assign,
            AssignOp::SubtractAssign,
            AssignOp::MultiplyAssign,
        ]
    );

    match &stmts[2] {
        Statement::Assignment(assign) => {
            assert!(matches!(assign.target, Expression::Dereference(_)))
        }
        other => panic!("Expected assignment, got {:?}", other),
    }
    match &stmts[4] {
        Statement::Assignment(assign) => assert!(assign.annotation.is_some()),
        other => panic!("Expected assignment, got {:?}", other),
    }
}

#[test]
fn test_bare_identifier_is_expression_statement() {
    let stmts = statements("x;\nf(x);");
    assert!(matches!(&stmts[0], Statement::Expression(_)));
    match &stmts[1] {
        Statement::Expression(stmt) => assert_eq!(render(&stmt.expression), "f(x)"),
        other => panic!("Expected expression statement, got {:?}", other),
    }
}

#[test]
fn test_if_else_chain() {
    let stmts = statements(
        r#"
    if a {
        x = 1;
    } else if b {
        x = 2;
    } else x = 3;
    "#,
    );
    assert_eq!(stmts.len(), 1);

    match &stmts[0] {
        Statement::If(stmt) => {
            assert!(!stmt.parenthesized);
            assert!(matches!(*stmt.then_branch, Statement::Block(_)));
            match stmt.else_branch.as_deref() {
                Some(Statement::If(nested)) => {
                    assert!(matches!(
                        nested.else_branch.as_deref(),
                        Some(Statement::Assignment(_))
                    ));
                }
                other => panic!("Expected else-if, got {:?}", other),
            }
        }
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_if_then_single_statement() {
    let stmts = statements("if (x > 0) then return 1;");
    match &stmts[0] {
        Statement::If(stmt) => {
            assert!(stmt.parenthesized);
            assert_eq!(render(&stmt.condition), "(x > 0)");
            assert!(matches!(*stmt.then_branch, Statement::Return(_)));
        }
        other => panic!("Expected if statement, got {:?}", other),
    }
}

#[test]
fn test_if_equality_with_cases() {
    let stmts = statements(
        r#"
    if kind == {
        case .A;
            handle_a();
        case #through;
        case;
            fallback();
    }
    "#,
    );

    match &stmts[0] {
        Statement::IfEquality(stmt) => {
            assert!(!stmt.complete);
            assert_eq!(stmt.body.statements.len(), 5);
            match &stmt.body.statements[2] {
                Statement::Case(case) => {
                    assert_eq!(case.directive.as_ref().map(|d| d.name.as_str()), Some("through"));
                    assert!(case.value.is_none());
                }
                other => panic!("Expected case, got {:?}", other),
            }
        }
        other => panic!("Expected if-equality, got {:?}", other),
    }
}

#[test]
fn test_loops_with_labels() {
    let stmts = statements(
        r#"
    while outer: i < 10 {
        i += 1;
        if i == 5 break outer;
        continue;
    }
    for 0..10 print(it);
    for item: items { break : item; }
    "#,
    );
    assert_eq!(stmts.len(), 3);

    match &stmts[0] {
        Statement::While(stmt) => {
            assert_eq!(stmt.label.as_deref(), Some("outer"));
            assert_eq!(render(&stmt.condition), "(i < 10)");
            match &*stmt.body {
                Statement::Block(block) => assert_eq!(block.statements.len(), 3),
                other => panic!("Expected block, got {:?}", other),
            }
        }
        other => panic!("Expected while, got {:?}", other),
    }
    match &stmts[1] {
        Statement::For(stmt) => {
            assert!(stmt.label.is_none());
            assert!(matches!(stmt.iterable, Expression::Range(_)));
            assert!(matches!(*stmt.body, Statement::Expression(_)));
        }
        other => panic!("Expected for, got {:?}", other),
    }
    match &stmts[2] {
        Statement::For(stmt) => assert_eq!(stmt.label.as_deref(), Some("item")),
        other => panic!("Expected for, got {:?}", other),
    }
}

#[test]
fn test_defers_keep_registration_order() {
    let stmts = statements("defer a();\ndefer b();");

    let callees: Vec<_> = stmts
        .iter()
        .map(|stmt| match stmt {
            Statement::Defer(defer) => match &*defer.body {
                Statement::Expression(e) => render(&e.expression),
                other => panic!("Expected expression body, got {:?}", other),
            },
            other => panic!("Expected defer, got {:?}", other),
        })
        .collect();
    assert_eq!(callees, vec!["a()", "b()"]);

    // 実行は登録の逆順になる
    let execution: Vec<_> = callees.iter().rev().cloned().collect();
    assert_eq!(execution, vec!["b()", "a()"]);
}

#[test]
fn test_defer_block_and_assignment() {
    let stmts = statements("defer { close(f); }\ndefer count -= 1;");
    assert!(matches!(
        &stmts[0],
        Statement::Defer(DeferStatement { body, .. }) if matches!(**body, Statement::Block(_))
    ));
    assert!(matches!(
        &stmts[1],
        Statement::Defer(DeferStatement { body, .. }) if matches!(**body, Statement::Assignment(_))
    ));
}

#[test]
fn test_using_wraps_statement() {
    let stmts = statements("using ctx;\nusing v: Vector3;");
    match &stmts[0] {
        Statement::Using(stmt) => assert!(matches!(*stmt.body, Statement::Expression(_))),
        other => panic!("Expected using, got {:?}", other),
    }
    match &stmts[1] {
        Statement::Using(stmt) => assert!(matches!(
            *stmt.body,
            Statement::Declaration(Definition::Variable(_))
        )),
        other => panic!("Expected using, got {:?}", other),
    }
}

#[test]
fn test_return_forms() {
    let stmts = statements("return;\nreturn a, b;\nreturn q = 1, r = 2;");

    match &stmts[0] {
        Statement::Return(stmt) => assert_eq!(stmt.values, ReturnValues::Positional(vec![])),
        other => panic!("Expected return, got {:?}", other),
    }
    match &stmts[1] {
        Statement::Return(ReturnStatement {
            values: ReturnValues::Positional(values),
            ..
        }) => assert_eq!(values.len(), 2),
        other => panic!("Expected positional return, got {:?}", other),
    }
    match &stmts[2] {
        Statement::Return(ReturnStatement {
            values: ReturnValues::Named(values),
            ..
        }) => {
            let names: Vec<_> = values.iter().map(|v| v.name.as_str()).collect();
            assert_eq!(names, vec!["q", "r"]);
        }
        other => panic!("Expected named return, got {:?}", other),
    }
}

#[test]
fn test_nested_block_and_local_procedure() {
    let stmts = statements(
        r#"
    {
        x := 1;
    }
    helper :: (n: int) -> int { return n; }
    helper(2);
    "#,
    );
    assert!(matches!(&stmts[0], Statement::Block(block) if block.statements.len() == 1));
    assert!(matches!(&stmts[1], Statement::Declaration(Definition::Proc(_))));
    assert!(matches!(&stmts[2], Statement::Expression(_)));
}

#[test]
fn test_directive_statements() {
    let stmts = statements(
        r#"
    #insert code;
    #assert(x > 0);
    #run { setup(); }
    #if DEBUG { log(x); }
    #no_context;
    "#,
    );
    assert!(matches!(&stmts[0], Statement::Insert(InsertDirective { name, .. }) if name == "code"));
    assert!(matches!(&stmts[1], Statement::Assert(_)));
    assert!(matches!(
        &stmts[2],
        Statement::Run(RunDirective {
            body: RunBody::Block(_),
            ..
        })
    ));
    match &stmts[3] {
        Statement::IfDirective(directive) => {
            assert!(matches!(directive.then_branch[0], Statement::Expression(_)));
        }
        other => panic!("Expected #if, got {:?}", other),
    }
    assert!(matches!(&stmts[4], Statement::Directive(d) if d.name == "no_context"));
}
