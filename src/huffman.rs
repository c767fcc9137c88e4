use std::collections::{BTreeMap, HashMap};

use crate::code::Code;
use crate::error::{CodecError, Result};
use crate::tree::TreeNode;
use crate::Symbol;

pub type ReverseTable = HashMap<Code, Symbol>;

/// Symbol to code word mapping derived from a Huffman tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, symbol: Symbol, code: Code) -> Option<Code> {
        self.codes.insert(symbol, code)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }

    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(Code::len).max().unwrap_or(0)
    }

    pub fn is_prefix_free(&self) -> bool {
        let mut codes = self.codes.values().collect::<Vec<_>>();
        // A prefix sorts directly before some code that extends it.
        codes.sort();
        codes.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Inverts the table for decoding. Two symbols sharing a code word make
    /// the table unusable.
    pub fn reverse(&self) -> Result<ReverseTable> {
        let mut reverse = ReverseTable::with_capacity(self.codes.len());
        for (symbol, code) in self.iter() {
            if let Some(previous) = reverse.insert(code.clone(), symbol) {
                return Err(CodecError::malformed_header(format!(
                    "symbols {previous} and {symbol} share the code {code}"
                )));
            }
        }
        Ok(reverse)
    }
}

impl FromIterator<(Symbol, Code)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, Code)>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().collect(),
        }
    }
}

/// Walks the tree depth first, appending `0` for a left turn and `1` for a
/// right turn. A bare leaf gets the one bit code `0` so that it can still be
/// told apart in the encoded stream.
pub fn construct_code_table(root: &TreeNode) -> CodeTable {
    let mut table = CodeTable::new();

    if let TreeNode::Leaf { symbol, .. } = root {
        table.insert(*symbol, Code::from(vec![false]));
        return table;
    }

    let mut pending = vec![(root, Code::new())];
    while let Some((node, code)) = pending.pop() {
        match node {
            TreeNode::Leaf { symbol, .. } => {
                table.insert(*symbol, code);
            }
            TreeNode::Internal { left, right, .. } => {
                pending.push((right, code.with(true)));
                pending.push((left, code.with(false)));
            }
        }
    }

    table
}

pub fn print_code_table(table: &CodeTable) {
    for (symbol, code) in table.iter() {
        println!("\t{}\t{code}", printable(symbol));
    }
}

fn printable(symbol: Symbol) -> String {
    match char::from_u32(symbol as u32) {
        Some(c) if !c.is_control() && !c.is_whitespace() => c.to_string(),
        _ => format!("{symbol:#06x}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_frequencies;
    use crate::tree::build_tree;

    fn table_for(input: &[u8]) -> CodeTable {
        let symbols = input.iter().map(|&b| b as Symbol).collect::<Vec<_>>();
        construct_code_table(&build_tree(&count_frequencies(&symbols)).unwrap())
    }

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_two_symbols() {
        let table = table_for(b"aaab");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(b'b' as Symbol), Some(&code("0")));
        assert_eq!(table.get(b'a' as Symbol), Some(&code("1")));
    }

    #[test]
    fn test_single_symbol() {
        let table = table_for(b"xxxx");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(b'x' as Symbol), Some(&code("0")));
    }

    #[test]
    fn test_code_lengths_follow_frequency() {
        let counts = [
            (b'a', 45),
            (b'b', 13),
            (b'c', 12),
            (b'd', 16),
            (b'e', 9),
            (b'f', 5),
        ];
        let mut input = Vec::new();
        for (symbol, count) in counts {
            input.extend(std::iter::repeat(symbol).take(count));
        }
        let table = table_for(&input);

        assert_eq!(table.len(), 6);
        assert!(table.is_prefix_free());
        assert_eq!(table.get(b'a' as Symbol).unwrap().len(), 1);
        assert_eq!(table.get(b'f' as Symbol).unwrap().len(), 4);
        assert_eq!(table.max_code_len(), 4);

        let total_bits: usize = input
            .iter()
            .map(|&b| table.get(b as Symbol).unwrap().len())
            .sum();
        assert_eq!(total_bits, 224);
    }

    #[test]
    fn test_prefix_free_detection() {
        let table: CodeTable = vec![(1, code("0")), (2, code("01")), (3, code("11"))]
            .into_iter()
            .collect();
        assert!(!table.is_prefix_free());

        let table: CodeTable = vec![(1, code("0")), (2, code("10")), (3, code("11"))]
            .into_iter()
            .collect();
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_reverse() {
        let table = table_for(b"abracadabra");
        let reverse = table.reverse().unwrap();
        assert_eq!(reverse.len(), table.len());
        for (symbol, code) in table.iter() {
            assert_eq!(reverse[code], symbol);
        }

        let clashing: CodeTable = vec![(1, code("10")), (2, code("10"))].into_iter().collect();
        assert!(matches!(
            clashing.reverse(),
            Err(CodecError::MalformedHeader(_))
        ));
    }
}
