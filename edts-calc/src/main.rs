//! Command-line interface for the EDTS calculator.
//!
//! Evaluates one arithmetic expression, asking on the terminal for the value
//! of every variable it mentions, and prints the result, the decorated tree
//! and the symbol table. Unless `--no-write` is given, the grammar, its
//! LL(1) sets, the attribute grammar, the translation scheme and the results
//! are also written as text files into the output directory.

use anyhow::Context;
use clap::Parser as ClapParser;
use edts_calc::{Parsed, PromptResolver, evaluate};
use edts_gen::ll1::report::{ATTRIBUTE_GRAMMAR, EDTS_SCHEME, write_grammar, write_sets};
use edts_gen::{ARITH, Ll1Sets};
use std::fs::{self, File};
use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::{Path, PathBuf};

#[derive(ClapParser, Debug)]
#[command(version, about = "Evaluate an arithmetic expression with an LL(1) EDTS parser")]
struct Args {
    /// Expression to evaluate; read from the first line of stdin when omitted
    expression: Option<String>,

    /// Directory receiving the generated reports
    #[arg(short, long, default_value = "out")]
    out_dir: PathBuf,

    /// Print results only, write no files
    #[arg(long)]
    no_write: bool,
}

fn read_expression<R: BufRead>(input: &mut R) -> anyhow::Result<String> {
    if io::stdin().is_terminal() {
        print!("expression: ");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("can't read expression from stdin")?;
    Ok(line.trim().to_owned())
}

fn write_report<F>(dir: &Path, name: &str, f: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let path = dir.join(name);
    let file = File::create(&path).with_context(|| format!("can't create {:?}", path))?;
    let mut out = BufWriter::new(file);
    f(&mut out)
        .and_then(|()| out.flush())
        .with_context(|| format!("can't write {:?}", path))?;
    log::info!("wrote {:?}", path);
    Ok(())
}

fn write_reports(dir: &Path, sets: &Ll1Sets, expr: &str, parsed: &Parsed) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("can't create directory {:?}", dir))?;
    write_report(dir, "grammar.txt", |out| {
        write_grammar(out, &ARITH)?;
        writeln!(out)?;
        write_sets(out, &ARITH, sets)
    })?;
    write_report(dir, "attrib_grammar.txt", |out| out.write_all(ATTRIBUTE_GRAMMAR.as_bytes()))?;
    write_report(dir, "etds.txt", |out| out.write_all(EDTS_SCHEME.as_bytes()))?;
    write_report(dir, "ast.txt", |out| {
        writeln!(out, "== Decorated AST ==")?;
        writeln!(out, "{}", parsed.ast.pretty())
    })?;
    write_report(dir, "symbols.txt", |out| write!(out, "{}", parsed.symtab))?;
    write_report(dir, "eval.txt", |out| {
        writeln!(out, "== Result ==")?;
        writeln!(out, "{} = {}", expr, parsed.value)
    })?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let expr = match args.expression {
        Some(expr) => expr.trim().to_owned(),
        None => read_expression(&mut input)?,
    };
    if expr.is_empty() {
        println!("no expression given");
        return Ok(());
    }

    let sets = Ll1Sets::compute(&ARITH);
    let conflicts = edts_gen::ll1::conflicts(&ARITH, &sets.predict);
    if !conflicts.is_empty() {
        log::warn!("grammar is not LL(1): {:?}", conflicts);
    }

    let parsed = evaluate(&expr, PromptResolver::new(&mut input, io::stdout()))
        .with_context(|| format!("can't evaluate {:?}", expr))?;

    println!("{} = {}", expr, parsed.value);
    println!();
    println!("== Decorated AST ==");
    println!("{}", parsed.ast.pretty());
    println!();
    print!("{}", parsed.symtab);

    if !args.no_write {
        write_reports(&args.out_dir, &sets, &expr, &parsed)?;
        println!();
        println!("reports written to {:?}", args.out_dir);
    }
    Ok(())
}
