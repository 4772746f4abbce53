use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal, Read, Write};

use clap::{Arg, ArgAction, Command};

use pinyin_notation::{NotationConfig, NotationError, PinyinNotation};

fn read_input(input: &mut dyn Read, is_console: bool) -> Result<Vec<u8>, io::Error> {
    let mut buffer = Vec::new();

    if is_console {
        // Read chunks of data when input is from the console
        let mut chunk = [0; 1024];
        loop {
            match input.read(&mut chunk) {
                Ok(0) => break,
                Ok(bytes_read) => buffer.extend_from_slice(&chunk[..bytes_read]),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    } else {
        input.read_to_end(&mut buffer)?;
    }

    Ok(buffer)
}

fn remove_utf8_bom(input: &mut Vec<u8>) {
    // UTF-8 BOM: EF BB BF
    if input.starts_with(&[0xEF, 0xBB, 0xBF]) {
        input.drain(0..3);
    }
}

fn config_names() -> Vec<&'static str> {
    NotationConfig::ALL.iter().map(|cfg| cfg.as_str()).collect()
}

fn parse_config(name: &str) -> Result<NotationConfig, NotationError> {
    NotationConfig::try_from(name).map_err(|err| {
        eprintln!("{}", err);
        eprintln!("Valid Configs: {:?}", config_names());
        err
    })
}

fn main() -> Result<(), NotationError> {
    const BLUE: &str = "\x1B[1;34m";
    const RESET: &str = "\x1B[0m";

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let matches = Command::new("Pinyin Notation")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("file")
                .help("Read original text from <file>."),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Write converted text to <file>."),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("conversion")
                .help("Conversion configuration: [p2d|d2p|p2z|p2i|z2i|ipa]")
                .required(true),
        )
        .arg(
            Arg::new("mandarin")
                .short('m')
                .long("mandarin")
                .action(ArgAction::SetTrue)
                .help("Enable .1-.5 Mandarin tone codes for the ipa config."),
        )
        .arg(
            Arg::new("no_parallel")
                .long("no-parallel")
                .action(ArgAction::SetTrue)
                .help("Convert lines sequentially."),
        )
        .about(format!(
            "{BLUE}Pinyin Notation: Pinyin, Zhuyin and IPA converter{RESET}"
        ))
        .get_matches();

    let input_file = matches.get_one::<String>("input");
    let output_file = matches.get_one::<String>("output");
    let config_name = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or_default();
    let config = parse_config(config_name)?;

    let mut notation = PinyinNotation::new();
    notation.set_mandarin(matches.get_flag("mandarin"));
    notation.set_parallel(!matches.get_flag("no_parallel"));
    log::debug!(
        "config={} mandarin={} parallel={}",
        config,
        notation.get_mandarin(),
        notation.get_parallel()
    );

    // Determine input source
    let mut input: Box<dyn Read> = match input_file {
        Some(file_name) => Box::new(BufReader::new(File::open(file_name)?)),
        None => {
            if io::stdin().is_terminal() {
                println!("{BLUE}Input text to convert, <ctrl-z> or <ctrl-d> to submit:{RESET}");
            }
            Box::new(io::stdin())
        }
    };

    let is_console = input_file.is_none();
    let mut buffer = read_input(&mut *input, is_console)?;
    remove_utf8_bom(&mut buffer);
    let input_str = String::from_utf8_lossy(&buffer);

    let output_str = notation.convert_with_config(&input_str, config);

    let mut output = BufWriter::new(match output_file {
        Some(file_name) => Box::new(File::create(file_name)?) as Box<dyn Write>,
        None => Box::new(io::stdout()) as Box<dyn Write>,
    });
    write!(output, "{}", output_str)?;
    output.flush()?;

    // Summary on stderr, stdout may be piped
    let source = input_file.map_or("<stdin>", String::as_str);
    let target = output_file.map_or("stdout", String::as_str);
    eprintln!("{BLUE}Conversion completed ({config}): {source} -> {target}{RESET}");

    Ok(())
}
