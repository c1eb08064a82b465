//! CPLEX LP text format writer.
//!
//! The output is readable by CBC, GLPK, HiGHS, SCIP, CPLEX and Gurobi. Variables
//! keep the default `[0, +inf)` bounds of the format, so no `Bounds` section
//! is emitted; integer variables are listed under `General`.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::constants::LP_TERMS_PER_LINE;
use crate::error::Result;
use crate::program::expr::LinearExpr;
use crate::program::linear_program::LinearProgram;

/// Allocates unique, format-legal identifiers.
#[derive(Default)]
struct NameTable {
    used: HashSet<String>,
}

impl NameTable {
    fn claim(&mut self, raw: &str) -> String {
        let base = sanitize(raw);
        let mut name = base.clone();
        let mut n = 2;
        while !self.used.insert(name.clone()) {
            name = format!("{}_{}", base, n);
            n += 1;
        }
        name
    }
}

/// Section and bound keywords a reader could take a bare label for.
const KEYWORDS: [&str; 24] = [
    "minimize", "minimum", "min", "maximize", "maximum", "max", "subject", "such", "st", "s.t.",
    "bounds", "bound", "general", "generals", "gen", "integer", "integers", "binary",
    "binaries", "bin", "end", "free", "inf", "infinity",
];

fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!\"#$%&()/,.;?@_`'{}|~".contains(c)
}

/// Map a model name to an LP identifier.
///
/// Brackets become parentheses, other illegal characters become `_`, names
/// that would parse as a number get a leading `_`, and section keywords get a
/// trailing `_`.
pub fn sanitize(raw: &str) -> String {
    let mut out: String = raw
        .chars()
        .map(|c| match c {
            '[' => '(',
            ']' => ')',
            c if is_allowed(c) => c,
            _ => '_',
        })
        .collect();

    let mut chars = out.chars();
    let needs_prefix = match (chars.next(), chars.next()) {
        (None, _) => true,
        (Some(c), _) if c.is_ascii_digit() || c == '.' => true,
        (Some('e' | 'E'), Some(next)) => next.is_ascii_digit() || next == 'e' || next == 'E',
        _ => false,
    };
    if needs_prefix {
        out.insert(0, '_');
    }
    if KEYWORDS.iter().any(|k| out.eq_ignore_ascii_case(k)) {
        out.push('_');
    }
    out.truncate(255);
    out
}

fn write_expr<W: Write>(out: &mut W, expr: &LinearExpr, var_names: &[String]) -> Result<()> {
    let mut written = 0;
    for (var, coef) in expr.nonzero_terms() {
        if written > 0 && written % LP_TERMS_PER_LINE == 0 {
            write!(out, "\n   ")?;
        }
        let sign = if *coef < 0.0 { "-" } else { "+" };
        if written == 0 && sign == "+" {
            write!(out, " {} {}", coef.abs(), var_names[var.0])?;
        } else {
            write!(out, " {} {} {}", sign, coef.abs(), var_names[var.0])?;
        }
        written += 1;
    }
    if written == 0 {
        if let Some(first) = var_names.first() {
            write!(out, " 0 {}", first)?;
        }
    }
    Ok(())
}

/// Write `program` in CPLEX LP format.
pub fn write_lp<W: Write>(program: &LinearProgram, out: &mut W) -> Result<()> {
    let mut names = NameTable::default();
    let var_names: Vec<String> = program
        .variables()
        .iter()
        .map(|v| names.claim(&v.name))
        .collect();

    let title: String = program
        .name()
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    writeln!(out, "\\ Problem: {}", title)?;
    writeln!(
        out,
        "\\ {} variables ({} integer), {} constraints",
        program.variables().len(),
        program.integer_count(),
        program.constraints().len()
    )?;
    writeln!(out)?;

    writeln!(out, "Minimize")?;
    let obj_name = names.claim("obj");
    write!(out, " {}:", obj_name)?;
    write_expr(out, program.objective(), &var_names)?;
    writeln!(out)?;

    writeln!(out, "Subject To")?;
    for constraint in program.constraints() {
        let mut rows: Vec<(String, &str, f64)> = Vec::new();
        match (constraint.has_lower(), constraint.has_upper()) {
            (true, true) if constraint.lower == constraint.upper => {
                rows.push((constraint.name.clone(), "=", constraint.lower));
            }
            (true, true) => {
                rows.push((format!("{}_lo", constraint.name), ">=", constraint.lower));
                rows.push((format!("{}_hi", constraint.name), "<=", constraint.upper));
            }
            (true, false) => rows.push((constraint.name.clone(), ">=", constraint.lower)),
            (false, true) => rows.push((constraint.name.clone(), "<=", constraint.upper)),
            (false, false) => {
                tracing::debug!(constraint = %constraint.name, "skipping free row");
            }
        }

        for (row_name, op, rhs) in rows {
            write!(out, " {}:", names.claim(&row_name))?;
            write_expr(out, &constraint.expr, &var_names)?;
            writeln!(out, " {} {}", op, rhs)?;
        }
    }

    let integers: Vec<&String> = program
        .variables()
        .iter()
        .zip(&var_names)
        .filter(|(v, _)| v.domain.is_integer())
        .map(|(_, name)| name)
        .collect();
    if !integers.is_empty() {
        writeln!(out, "General")?;
        for chunk in integers.chunks(LP_TERMS_PER_LINE) {
            let line: Vec<&str> = chunk.iter().map(|s| s.as_str()).collect();
            writeln!(out, " {}", line.join(" "))?;
        }
    }

    writeln!(out, "End")?;
    Ok(())
}

pub fn to_lp_string(program: &LinearProgram) -> Result<String> {
    let mut buf = Vec::new();
    write_lp(program, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `program` to an LP file at `path`.
pub fn save_lp(program: &LinearProgram, path: &Path) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_lp(program, &mut out)?;
    out.flush()?;
    Ok(())
}
