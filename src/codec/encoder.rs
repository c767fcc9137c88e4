use log::debug;

use crate::bit_stream::pack;
use crate::error::Result;
use crate::format::{EncodedArtifact, Header};
use crate::frequency::{count_frequencies, significant_symbols};
use crate::huffman::{construct_code_table, CodeTable};
use crate::tree::build_tree;
use crate::Symbol;

use super::CodecOptions;

pub struct Encoder {
    options: CodecOptions,
}

impl Encoder {
    pub fn new(options: CodecOptions) -> Self {
        Self { options }
    }

    pub fn encode(&self, input: &[u8]) -> Result<EncodedArtifact> {
        let symbols = self.options.alphabet.symbols(input)?;
        let symbols = significant_symbols(&symbols, self.options.stop_at_nul);

        let frequencies = count_frequencies(symbols);
        let tree = build_tree(&frequencies)?;
        let table = construct_code_table(&tree);
        debug!(
            "{} symbols, {} distinct, longest code {} bits",
            tree.weight(),
            table.len(),
            table.max_code_len()
        );

        let codes = &table;
        let packed = pack(
            symbols
                .iter()
                .flat_map(move |&symbol| code_bits(codes, symbol)),
        )?;
        debug!(
            "body is {} bits packed into {} bytes",
            packed.bit_len(),
            packed.bytes.len()
        );

        Ok(EncodedArtifact::new(
            Header::new(packed.padding, table),
            packed.bytes,
        ))
    }
}

fn code_bits(table: &CodeTable, symbol: Symbol) -> impl Iterator<Item = bool> + '_ {
    // Every counted symbol has a leaf, so the lookup cannot miss.
    table
        .get(symbol)
        .map(|code| code.bits())
        .unwrap_or_default()
        .iter()
        .copied()
}
