use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jambase::{FixedHeaderInfo, JamBase, Message, ReadOptions, Result};

#[derive(Parser)]
#[command(author, version, about = "Dump the contents of a JAM message base", long_about = None)]
struct Cli {
    /// Path to the base header file (*.jhr / *.JHR)
    header: PathBuf,
    /// Only print the fixed header summary
    #[arg(long)]
    header_only: bool,
    /// Stop after this many messages
    #[arg(long)]
    limit: Option<usize>,
    /// Decode on a background thread instead of inline
    #[arg(long)]
    stream: bool,
    /// Largest subfield block a record may declare, in bytes
    #[arg(long)]
    max_subfield_len: Option<u32>,
    /// Largest message body a record may declare, in bytes
    #[arg(long)]
    max_text_len: Option<u32>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\nERROR: Failed to read JAM base");
            eprintln!("  {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut options = ReadOptions::default();
    if let Some(len) = cli.max_subfield_len {
        options.max_subfield_len = len;
    }
    if let Some(len) = cli.max_text_len {
        options.max_text_len = len;
    }
    let base = JamBase::with_options(&cli.header, options)?;

    println!("Reading JAM base: {}", base.header_path().display());
    println!("{}", "=".repeat(60));
    print_fixed_header(&base.read_fixed_header()?);
    if cli.header_only {
        return Ok(());
    }

    let limit = cli.limit.unwrap_or(usize::MAX);
    let messages: Box<dyn Iterator<Item = Result<Message>>> = if cli.stream {
        Box::new(base.stream())
    } else {
        Box::new(base.messages()?)
    };

    let mut count = 0;
    for result in messages.take(limit) {
        print_message(&result?);
        count += 1;
    }
    println!("\n{}", "=".repeat(60));
    println!("{} messages read.", count);
    Ok(())
}

fn print_fixed_header(info: &FixedHeaderInfo) {
    println!("\nBase Information:");
    println!("  Created: {}", info.date_created);
    println!("  Update counter: {}", info.update_counter);
    println!("  Active messages: {}", info.active_messages);
    println!("  Base message number: {}", info.base_message_number);
}

fn print_message(message: &Message) {
    let header = &message.header;
    let date = |d: Option<chrono::DateTime<chrono::Utc>>| {
        d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
    };
    println!("\n{}", "-".repeat(60));
    println!("Message #{}", header.message_number);
    println!(
        "  Reply to: {}  First reply: {}  Next reply: {}",
        header.reply_to, header.reply_first, header.reply_next
    );
    println!("  Written: {}", date(header.date_written));
    println!("  Received: {}", date(header.date_received));
    println!("  Processed: {}", date(header.date_processed));
    println!("  Attributes: {}", header.attribute);
    println!("  Text: {} bytes at offset {}", header.text_length, header.text_offset);
    println!();
    println!("{}", message.text);
}
