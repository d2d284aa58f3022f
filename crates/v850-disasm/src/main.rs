use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use std::fmt::Write as _;
use std::path::Path;

use v850_rs::decoder::Decoder;
use v850_rs::disasm::fmt_decoded;
use v850_rs::isa::nec850::{selfcheck, N850Decoder};
use v850_rs::MAX_INSN_LEN;

mod model;
use model::{load_raw_bin, read_u16, read_window, Image};

#[derive(Parser, Debug)]
#[command(author, version, about = "V850 disassembler CLI", long_about = None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value_t = 0u32)]
    base: u32,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: String,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex or dec)
        start: String,
        /// End address (hex or dec, exclusive)
        end: String,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, serde::Serialize)]
struct LineOut {
    addr: u32,
    bytes: Vec<u8>,
    text: String,
    /// false for unrecognized data halfwords
    insn: bool,
}

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn disasm_range(img: &Image, start: u32, end: u32) -> Vec<LineOut> {
    let dec = N850Decoder::new();
    let mut lines = Vec::new();
    let mut pc = start;
    while pc < end {
        let window = read_window(img, pc, MAX_INSN_LEN);
        if window.is_empty() {
            break;
        }
        if let Some(d) = dec.decode(&window) {
            let len = usize::from(d.len);
            lines.push(LineOut {
                addr: pc,
                bytes: window[..len].to_vec(),
                text: fmt_decoded(&d),
                insn: true,
            });
            pc = pc.wrapping_add(u32::from(d.len));
        } else {
            // advance by the 2-byte alignment unit and show raw data
            let text = match read_u16(img, pc) {
                Some(hw) => format!(".hword {hw:#06x}"),
                None => format!(".byte {:#04x}", window[0]),
            };
            lines.push(LineOut {
                addr: pc,
                bytes: window[..window.len().min(2)].to_vec(),
                text,
                insn: false,
            });
            pc = pc.wrapping_add(2);
        }
    }
    lines
}

fn render_text(lines: &[LineOut], show_bytes: bool) -> String {
    let mut buf = String::new();
    for line in lines {
        if show_bytes {
            let _ = write!(buf, "{:#010x}: ", line.addr);
            for b in &line.bytes {
                let _ = write!(buf, "{b:02x} ");
            }
            // pad to the widest encoding so mnemonics line up
            for _ in line.bytes.len()..MAX_INSN_LEN {
                buf.push_str("   ");
            }
            let _ = writeln!(buf, " {}", line.text);
        } else {
            let _ = writeln!(buf, "{:#010x}: {}", line.addr, line.text);
        }
    }
    buf
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(report) = selfcheck() {
        tracing::warn!(%report, "instruction table has unreachable definitions");
    }

    let cli = Cli::parse();
    let img = load_raw_bin(Path::new(&cli.input), cli.base, cli.skip, cli.len)?;

    match cli.cmd {
        Command::Sections => {
            println!(
                "{:<10} {:<12} {:<12} {:<6} {:<6}",
                "name", "start", "end", "perms", "kind"
            );
            for s in &img.segments {
                let start = s.base;
                let end = s.base + (s.bytes.len() as u32);
                println!(
                    "{:<10} {start:#010x} {end:#010x} {:<6} {:<6}",
                    s.name, s.perms, s.kind
                );
            }
        }
        Command::Range {
            start,
            end,
            show_bytes,
            format,
            out,
        } => {
            let start = parse_u32(&start)?;
            let end = parse_u32(&end)?;
            anyhow::ensure!(end >= start, "end must be >= start");

            let lines = disasm_range(&img, start, end);
            let text = match format {
                OutputFormat::Text => render_text(&lines, show_bytes),
                OutputFormat::Json => serde_json::to_string_pretty(&lines)?,
            };
            if let Some(path) = out {
                std::fs::write(path, text)?;
            } else {
                print!("{text}");
            }
        }
    }

    Ok(())
}
