use clap::{arg, command, ArgAction};
use huff::{huffman::print_code_table, Alphabet, CodecOptions, Operation};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .arg(arg!(input: <INPUT> "The file to encode or to decode"))
        .arg(arg!(operation: <OPERATION> "Use 'e' to encode, 'd' to decode"))
        .arg(arg!(output: <OUTPUT> "Where to save the result"))
        .arg(
            arg!(--alphabet [ALPHABET] "How input bytes are split into symbols: 'bytes' or 'utf16'")
                .default_value("bytes"),
        )
        .arg(
            arg!(--"stop-at-nul" "Stop reading the input at the first zero symbol")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(-v --verbose "Print the code table").action(ArgAction::SetTrue))
        .get_matches();

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();
    let operation = matches
        .get_one::<String>("operation")
        .unwrap()
        .parse::<Operation>()?;

    let options = CodecOptions {
        alphabet: matches
            .get_one::<String>("alphabet")
            .unwrap()
            .parse::<Alphabet>()?,
        stop_at_nul: *matches.get_one::<bool>("stop-at-nul").unwrap_or(&false),
    };
    let verbose = *matches.get_one::<bool>("verbose").unwrap_or(&false);

    let (artifact, sizes) = match operation {
        Operation::Encode => huff::encode_file(input, output, &options)?,
        Operation::Decode => huff::decode_file(input, output, &options)?,
    };

    if verbose {
        print_code_table(&artifact.header.table);
    }

    let verb = match operation {
        Operation::Encode => "Encoded",
        Operation::Decode => "Decoded",
    };
    println!(
        "{verb} {} bytes into {} bytes",
        sizes.input_size, sizes.output_size
    );

    Ok(())
}
