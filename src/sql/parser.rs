//! Recursive-descent parser for strata-db.
//!
//! The entry point is [`Parser::parse`], which tokenizes the input and
//! parses the semicolon-separated statements into a `Vec<Statement>`,
//! failing on the first structural error. Batch callers that want to keep
//! going past a bad statement drive [`Parser::next_statement`] directly:
//! on an error the cursor is re-aligned past the statement's terminator,
//! so the statements that follow still parse.
//!
//! The parser is a single left-to-right cursor over the token stream; it
//! never backtracks.

use crate::error::{Result, StrataError};
use crate::sql::ast::*;
use crate::sql::lexer::{Lexer, Literal, Token, TokenKind};
use crate::types::DataType;

/// A recursive-descent parser that transforms a token stream into an AST.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Parse a statement string, failing on the first structural error.
    pub fn parse(input: &str) -> Result<Vec<Statement>> {
        let lexed = Lexer::new(input).tokenize();
        let mut parser = Parser::new(lexed.tokens);
        let mut stmts = Vec::new();
        while let Some(result) = parser.next_statement() {
            stmts.push(result?);
        }
        Ok(stmts)
    }

    /// Parse a session-level command: `CREATE DATABASE name;`,
    /// `DROP DATABASE name;`, or a bare database name to enter.
    pub fn parse_engine_command(input: &str) -> Result<EngineCommand> {
        let lexed = Lexer::new(input).tokenize();
        Parser::new(lexed.tokens).engine_command()
    }

    /// Create a parser over an already-lexed token stream.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The lexer always terminates the stream; guard hand-built streams.
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: String::new(),
                literal: None,
                line,
            });
        }
        Parser { tokens, pos: 0 }
    }

    // =======================================================================
    // Token helpers
    // =======================================================================

    fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !self.at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token only if it has the given kind.
    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(format!("expected {what}, got '{}'", self.describe_current())))
        }
    }

    fn expect_identifier(&mut self, what: &str) -> Result<String> {
        if self.check(TokenKind::Identifier) {
            let token = self.advance();
            match token.literal {
                Some(Literal::Text(name)) => Ok(name),
                _ => Ok(token.lexeme),
            }
        } else {
            Err(self.error(format!("expected {what}, got '{}'", self.describe_current())))
        }
    }

    fn describe_current(&self) -> String {
        if self.at_end() {
            "end of input".to_string()
        } else {
            self.current().lexeme.clone()
        }
    }

    fn error(&self, message: String) -> StrataError {
        StrataError::Parse {
            message,
            line: self.current().line,
        }
    }

    /// Skip forward past the next statement terminator so that the
    /// statements after a failed one still parse.
    fn synchronize(&mut self) {
        while !self.at_end() {
            if self.advance().kind == TokenKind::Semicolon {
                break;
            }
        }
    }

    // =======================================================================
    // Statement dispatch
    // =======================================================================

    /// Parse the next statement, or `None` at end of input.
    ///
    /// A leading token other than `CREATE`/`SELECT`/`INSERT` is a
    /// capability gap ([`StrataError::NotImplemented`]), not a grammar
    /// error. After any error the cursor is synchronized to the next
    /// statement boundary.
    pub fn next_statement(&mut self) -> Option<Result<Statement>> {
        while self.matches(TokenKind::Semicolon) {}
        if self.at_end() {
            return None;
        }

        let result = match self.current().kind {
            TokenKind::Create => self.create_table(),
            TokenKind::Select => self.select_statement(),
            TokenKind::Insert => self.insert_statement(),
            _ => Err(StrataError::NotImplemented(format!(
                "statements starting with '{}'",
                self.current().lexeme
            ))),
        };

        if result.is_err() {
            self.synchronize();
        }
        Some(result)
    }

    // =======================================================================
    // CREATE TABLE
    // =======================================================================

    fn create_table(&mut self) -> Result<Statement> {
        self.expect(TokenKind::Create, "CREATE")?;
        self.expect(TokenKind::Table, "TABLE after CREATE")?;
        let table = self.expect_identifier("table name after CREATE TABLE")?;
        self.expect(TokenKind::LeftParen, "'(' after table name")?;
        let columns = self.column_list()?;
        self.expect(TokenKind::RightParen, "')' after column definitions")?;
        self.expect(TokenKind::Semicolon, "';' after table definition")?;
        Ok(Statement::Create(CreateStatement { table, columns }))
    }

    fn column_list(&mut self) -> Result<Vec<ColumnDef>> {
        let mut columns = vec![self.column()?];
        while self.matches(TokenKind::Comma) {
            columns.push(self.column()?);
        }
        Ok(columns)
    }

    fn column(&mut self) -> Result<ColumnDef> {
        let name = self.expect_identifier("column name")?;

        let mut data_type = None;
        let mut nullable = true;
        let mut primary_key = false;
        let mut references = None;

        loop {
            match self.current().kind {
                TokenKind::References => {
                    self.advance();
                    let table = self.expect_identifier("table name after REFERENCES")?;
                    self.expect(TokenKind::LeftParen, "'(' after the referenced table, e.g. table(column)")?;
                    let column = self.expect_identifier("column name inside REFERENCES, e.g. table(column)")?;
                    self.expect(TokenKind::RightParen, "')' after the referenced column")?;
                    references = Some(ForeignKeyRef { table, column });
                    // Foreign keys cannot be null.
                    nullable = false;
                }
                TokenKind::Primary => {
                    self.advance();
                    self.expect(TokenKind::Key, "KEY after PRIMARY")?;
                    primary_key = true;
                    nullable = false;
                }
                TokenKind::StringType => {
                    self.advance();
                    data_type = Some(DataType::String);
                }
                TokenKind::NumberType => {
                    self.advance();
                    data_type = Some(DataType::Number);
                }
                TokenKind::Not => {
                    self.advance();
                    self.expect(TokenKind::Null, "NULL after NOT")?;
                    nullable = false;
                }
                TokenKind::Comma | TokenKind::RightParen => break,
                _ => {
                    return Err(self.error(format!(
                        "unexpected token in column definition: '{}'",
                        self.describe_current()
                    )));
                }
            }
        }

        let data_type = data_type
            .ok_or_else(|| self.error(format!("expected a column type for '{name}'")))?;

        Ok(ColumnDef {
            name,
            data_type,
            nullable,
            primary_key,
            references,
        })
    }

    // =======================================================================
    // SELECT
    // =======================================================================

    fn select_statement(&mut self) -> Result<Statement> {
        self.expect(TokenKind::Select, "SELECT")?;

        let mut columns = vec![self.select_item()?];
        while self.matches(TokenKind::Comma) {
            columns.push(self.select_item()?);
        }

        self.expect(TokenKind::From, "FROM after the SELECT list")?;
        let table = self.expect_identifier("table name after FROM")?;

        let where_clause = if self.matches(TokenKind::Where) {
            Some(self.or_expression()?)
        } else {
            None
        };

        self.matches(TokenKind::Semicolon);
        Ok(Statement::Select(SelectStatement {
            columns,
            table,
            where_clause,
        }))
    }

    fn select_item(&mut self) -> Result<Expr> {
        if self.matches(TokenKind::Star) {
            return Ok(Expr::Literal(Literal::Text("*".into())));
        }

        let name = self.expect_identifier("column name or '*' in the SELECT list")?;
        let column = Expr::Literal(Literal::Text(name));
        if self.matches(TokenKind::As) {
            let alias = self.expect_identifier("alias after AS")?;
            return Ok(Expr::Alias {
                expr: Box::new(column),
                alias,
            });
        }
        Ok(column)
    }

    // =======================================================================
    // INSERT
    // =======================================================================

    fn insert_statement(&mut self) -> Result<Statement> {
        self.expect(TokenKind::Insert, "INSERT")?;
        self.expect(TokenKind::Into, "INTO after INSERT")?;
        let table = self.expect_identifier("table name after INSERT INTO")?;

        let columns = if self.matches(TokenKind::Star) {
            InsertColumns::Wildcard
        } else {
            self.expect(
                TokenKind::LeftParen,
                "'(' or '*' for the insert column list, e.g. (col1, col2) or *",
            )?;
            let names = self.identifier_list()?;
            self.expect(TokenKind::RightParen, "')' after the insert column list")?;
            InsertColumns::Named(names)
        };

        self.expect(TokenKind::Values, "VALUES")?;
        self.expect(TokenKind::LeftParen, "'(' after VALUES")?;
        let values = self.value_list()?;
        self.expect(TokenKind::RightParen, "')' after the value list")?;

        self.matches(TokenKind::Semicolon);
        Ok(Statement::Insert(InsertStatement {
            table,
            columns,
            values,
        }))
    }

    /// A possibly empty, comma-separated list of identifiers.
    fn identifier_list(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        if self.check(TokenKind::RightParen) {
            return Ok(names);
        }
        names.push(self.expect_identifier("column name")?);
        while self.matches(TokenKind::Comma) {
            names.push(self.expect_identifier("column name after ','")?);
        }
        Ok(names)
    }

    /// A possibly empty, comma-separated list of value literals.
    fn value_list(&mut self) -> Result<Vec<Expr>> {
        let mut values = Vec::new();
        if self.check(TokenKind::RightParen) {
            return Ok(values);
        }
        values.push(self.value()?);
        while self.matches(TokenKind::Comma) {
            values.push(self.value()?);
        }
        Ok(values)
    }

    fn value(&mut self) -> Result<Expr> {
        match self.current().kind {
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::Number => {
                let token = self.advance();
                let literal = token.literal.unwrap_or(Literal::Text(token.lexeme));
                Ok(Expr::Literal(literal))
            }
            _ => Err(self.error(format!(
                "expected a value, got '{}'",
                self.describe_current()
            ))),
        }
    }

    // =======================================================================
    // Expressions
    // =======================================================================
    //
    // Precedence, low to high:
    //   OR < AND < (grouped | equality) < comparison < + - < * / < unary < primary

    fn or_expression(&mut self) -> Result<Expr> {
        let mut expr = self.and_expression()?;
        while self.matches(TokenKind::Or) {
            let right = self.and_expression()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op: LogicalOp::Or,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn and_expression(&mut self) -> Result<Expr> {
        let mut expr = self.equal_or_group()?;
        while self.matches(TokenKind::And) {
            let right = self.equal_or_group()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                op: LogicalOp::And,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn equal_or_group(&mut self) -> Result<Expr> {
        if self.matches(TokenKind::LeftParen) {
            let expr = self.or_expression()?;
            self.expect(TokenKind::RightParen, "')' after logical expression")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr> {
        let mut expr = self.comparison()?;
        while self.matches(TokenKind::Equals) {
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op: BinaryOp::Equals,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr> {
        let mut expr = self.expression()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Greater => BinaryOp::Greater,
                TokenKind::GreaterEq => BinaryOp::GreaterEq,
                TokenKind::Less => BinaryOp::Less,
                TokenKind::LessEq => BinaryOp::LessEq,
                _ => break,
            };
            self.advance();
            let right = self.expression()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    /// Arithmetic entry point: additive chain over multiplicative terms.
    fn expression(&mut self) -> Result<Expr> {
        let mut expr = self.multiplication()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.advance();
            let right = self.multiplication()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn multiplication(&mut self) -> Result<Expr> {
        let mut expr = self.unary()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.advance();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr> {
        if self.matches(TokenKind::Minus) {
            let expr = self.unary()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                expr: Box::new(expr),
            });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr> {
        match self.current().kind {
            TokenKind::Number | TokenKind::Identifier => {
                let token = self.advance();
                let literal = token.literal.unwrap_or(Literal::Text(token.lexeme));
                Ok(Expr::Literal(literal))
            }
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.expression()?;
                self.expect(TokenKind::RightParen, "')' after expression")?;
                Ok(Expr::Grouping(Box::new(expr)))
            }
            _ => Err(self.error(format!(
                "expected an expression, got '{}'",
                self.describe_current()
            ))),
        }
    }

    // =======================================================================
    // Session commands
    // =======================================================================

    fn engine_command(&mut self) -> Result<EngineCommand> {
        match self.current().kind {
            TokenKind::Create => {
                self.advance();
                self.expect(TokenKind::Database, "DATABASE after CREATE")?;
                let name = self.expect_identifier("database name after CREATE DATABASE")?;
                self.expect(TokenKind::Semicolon, "';' after the database name")?;
                Ok(EngineCommand::CreateDatabase(name))
            }
            TokenKind::Drop => {
                self.advance();
                self.expect(TokenKind::Database, "DATABASE after DROP")?;
                let name = self.expect_identifier("database name after DROP DATABASE")?;
                self.expect(TokenKind::Semicolon, "';' after the database name")?;
                Ok(EngineCommand::DropDatabase(name))
            }
            TokenKind::Identifier => {
                let name = self.expect_identifier("database name")?;
                self.matches(TokenKind::Semicolon);
                Ok(EngineCommand::Enter(name))
            }
            _ => Err(self.error(format!(
                "expected CREATE DATABASE, DROP DATABASE, or a database name, got '{}'",
                self.describe_current()
            ))),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(input: &str) -> Statement {
        let mut stmts = Parser::parse(input).expect("statement should parse");
        assert_eq!(stmts.len(), 1);
        stmts.remove(0)
    }

    fn parse_expr(input: &str) -> Expr {
        let lexed = Lexer::new(input).tokenize();
        Parser::new(lexed.tokens).expression().expect("expression should parse")
    }

    fn lit(text: &str) -> Expr {
        Expr::Literal(Literal::Text(text.into()))
    }

    fn num(value: f64) -> Expr {
        Expr::Literal(Literal::Number(value))
    }

    // -- select -------------------------------------------------------------

    #[test]
    fn select_two_columns_no_where() {
        let Statement::Select(select) = parse_one("Select column1 , column2 from table1;") else {
            panic!("expected SELECT");
        };
        assert_eq!(select.columns, vec![lit("column1"), lit("column2")]);
        assert_eq!(select.table, "table1");
        assert!(select.where_clause.is_none());
    }

    #[test]
    fn select_where_builds_one_binary() {
        let Statement::Select(select) = parse_one("Select column1 from table1 where id = 5") else {
            panic!("expected SELECT");
        };
        assert_eq!(
            select.where_clause,
            Some(Expr::Binary {
                left: Box::new(lit("id")),
                op: BinaryOp::Equals,
                right: Box::new(num(5.0)),
            })
        );
    }

    #[test]
    fn select_star_is_a_column_marker() {
        let Statement::Select(select) = parse_one("select * from t") else {
            panic!("expected SELECT");
        };
        assert_eq!(select.columns, vec![lit("*")]);
    }

    #[test]
    fn select_with_alias() {
        let Statement::Select(select) = parse_one("select col as alias from t") else {
            panic!("expected SELECT");
        };
        assert_eq!(
            select.columns,
            vec![Expr::Alias {
                expr: Box::new(lit("col")),
                alias: "alias".into(),
            }]
        );
    }

    #[test]
    fn select_where_logical_chain_is_left_associative() {
        let Statement::Select(select) =
            parse_one("select a from t where a = 1 or b = 2 and c = 3")
        else {
            panic!("expected SELECT");
        };
        // AND binds tighter than OR.
        let Some(Expr::Logical { op, .. }) = select.where_clause else {
            panic!("expected a logical root");
        };
        assert_eq!(op, LogicalOp::Or);
    }

    #[test]
    fn select_where_grouped_logical() {
        let Statement::Select(select) = parse_one("select a from t where (a = 1 or b = 2)") else {
            panic!("expected SELECT");
        };
        assert!(matches!(select.where_clause, Some(Expr::Grouping(_))));
    }

    #[test]
    fn select_without_from_fails() {
        let err = Parser::parse("select col1, col2;").unwrap_err();
        assert!(matches!(err, StrataError::Parse { .. }));
        assert!(err.to_string().contains("FROM"));
    }

    // -- expressions ---------------------------------------------------------

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse_expr("2 + 3 * 4");
        assert_eq!(
            expr,
            Expr::Binary {
                left: Box::new(num(2.0)),
                op: BinaryOp::Add,
                right: Box::new(Expr::Binary {
                    left: Box::new(num(3.0)),
                    op: BinaryOp::Mul,
                    right: Box::new(num(4.0)),
                }),
            }
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        let expr = parse_expr("(2 + 3) * 4");
        let Expr::Binary { left, op, .. } = expr else {
            panic!("expected Binary");
        };
        assert_eq!(op, BinaryOp::Mul);
        assert!(matches!(*left, Expr::Grouping(_)));
    }

    #[test]
    fn unary_minus() {
        let expr = parse_expr("-5 + 3");
        let Expr::Binary { left, op, .. } = expr else {
            panic!("expected Binary");
        };
        assert_eq!(op, BinaryOp::Add);
        assert!(matches!(*left, Expr::Unary { op: UnaryOp::Neg, .. }));
    }

    // -- create table --------------------------------------------------------

    fn column_of(input: &str, index: usize) -> ColumnDef {
        let Statement::Create(create) = parse_one(input) else {
            panic!("expected CREATE");
        };
        create.columns[index].clone()
    }

    #[test]
    fn column_number_not_null() {
        let col = column_of("create table t (OrderID number not null, id number primary key);", 0);
        assert_eq!(col.name, "OrderID");
        assert_eq!(col.data_type, DataType::Number);
        assert!(!col.nullable);
        assert!(!col.primary_key);
        assert!(col.references.is_none());
    }

    #[test]
    fn column_primary_key_is_non_nullable() {
        let col = column_of("create table t (columnName String Primary Key);", 0);
        assert!(col.primary_key);
        assert!(!col.nullable);
    }

    #[test]
    fn column_references_records_target_and_forces_non_nullable() {
        let col = column_of(
            "create table t (columnName String references tableName(attributeName), id number primary key);",
            0,
        );
        assert_eq!(
            col.references,
            Some(ForeignKeyRef {
                table: "tableName".into(),
                column: "attributeName".into(),
            })
        );
        assert!(!col.nullable);
    }

    #[test]
    fn plain_column_defaults_to_nullable() {
        let col = column_of("create table t (id number primary key, note string);", 1);
        assert!(col.nullable);
    }

    #[test]
    fn primary_without_key_fails() {
        let err =
            Parser::parse("create table t (columnName String Primary references x(y));").unwrap_err();
        assert!(err.to_string().contains("KEY after PRIMARY"));
    }

    #[test]
    fn not_without_null_fails() {
        let err = Parser::parse("create table t (a number not primary key);").unwrap_err();
        assert!(err.to_string().contains("NULL after NOT"));
    }

    #[test]
    fn column_without_type_fails() {
        let err = Parser::parse("create table t (a primary key);").unwrap_err();
        assert!(err.to_string().contains("column type"));
    }

    #[test]
    fn create_table_requires_semicolon() {
        let err = Parser::parse("create table t (a number primary key)").unwrap_err();
        assert!(err.to_string().contains("';'"));
    }

    // -- insert --------------------------------------------------------------

    #[test]
    fn insert_with_named_columns() {
        let Statement::Insert(insert) =
            parse_one("insert into t (a, b) values (1, two);")
        else {
            panic!("expected INSERT");
        };
        assert_eq!(insert.table, "t");
        assert_eq!(
            insert.columns,
            InsertColumns::Named(vec!["a".into(), "b".into()])
        );
        assert_eq!(insert.values, vec![num(1.0), lit("two")]);
    }

    #[test]
    fn insert_wildcard_columns() {
        let Statement::Insert(insert) = parse_one("insert into t * values (1, 2);") else {
            panic!("expected INSERT");
        };
        assert_eq!(insert.columns, InsertColumns::Wildcard);
        assert_eq!(insert.values.len(), 2);
    }

    #[test]
    fn insert_empty_lists_are_legal() {
        let Statement::Insert(insert) = parse_one("insert into t () values ();") else {
            panic!("expected INSERT");
        };
        assert_eq!(insert.columns, InsertColumns::Named(vec![]));
        assert!(insert.values.is_empty());
    }

    #[test]
    fn insert_accepts_quoted_string_values() {
        let Statement::Insert(insert) =
            parse_one("insert into t (a) values (\"hello world\");")
        else {
            panic!("expected INSERT");
        };
        assert_eq!(insert.values, vec![lit("hello world")]);
    }

    #[test]
    fn insert_without_into_fails() {
        let err = Parser::parse("insert t (a) values (1);").unwrap_err();
        assert!(err.to_string().contains("INTO after INSERT"));
    }

    // -- dispatch ------------------------------------------------------------

    #[test]
    fn unsupported_statement_is_a_capability_gap() {
        let err = Parser::parse("delete from t;").unwrap_err();
        assert!(matches!(err, StrataError::NotImplemented(_)));
    }

    #[test]
    fn parser_recovers_after_a_failed_statement() {
        let lexed = Lexer::new("update t set a = 1; select x from t;").tokenize();
        let mut parser = Parser::new(lexed.tokens);

        let first = parser.next_statement().unwrap();
        assert!(matches!(first, Err(StrataError::NotImplemented(_))));

        let second = parser.next_statement().unwrap();
        assert!(matches!(second, Ok(Statement::Select(_))));

        assert!(parser.next_statement().is_none());
    }

    #[test]
    fn empty_input_parses_to_no_statements() {
        assert!(Parser::parse("").unwrap().is_empty());
        assert!(Parser::parse(" ; ; ").unwrap().is_empty());
    }

    // -- engine commands -----------------------------------------------------

    #[test]
    fn engine_command_forms() {
        assert_eq!(
            Parser::parse_engine_command("create database sales;").unwrap(),
            EngineCommand::CreateDatabase("sales".into())
        );
        assert_eq!(
            Parser::parse_engine_command("drop database sales;").unwrap(),
            EngineCommand::DropDatabase("sales".into())
        );
        assert_eq!(
            Parser::parse_engine_command("sales").unwrap(),
            EngineCommand::Enter("sales".into())
        );
    }

    #[test]
    fn engine_create_requires_semicolon() {
        let err = Parser::parse_engine_command("create database sales").unwrap_err();
        assert!(err.to_string().contains("';'"));
    }
}
