//! Subcommand handlers. Each returns the text to print.

use std::env;

use glake_parser::position::{OffsetTranslator, Position, Range};
use glake_parser::scan::ScanOptions;
use glake_parser::toolbar::{
    expand_var_refs, parse_vars, HomeVars, Tokenizer, VarMap, VarRefScanner,
};
use serde::Serialize;

use crate::error::CliError;
use crate::output::Format;

#[derive(Debug, Serialize)]
struct ByteSpan {
    offset: usize,
    len: usize,
}

#[derive(Debug, Serialize)]
struct Expansion<'a> {
    source: &'a str,
    expanded: String,
}

pub struct Session {
    pub options: ScanOptions,
    pub home_vars: HomeVars,
    pub format: Format,
}

impl Session {
    pub fn tokens(&self, text: &str) -> Result<String, CliError> {
        let doc = Tokenizer::new(self.options).tokenize(text);
        self.format.render(&doc, |doc| doc.to_string())
    }

    pub fn varrefs(&self, text: &str) -> Result<String, CliError> {
        let refs = VarRefScanner::new(self.options).scan_str(text);
        self.format.render(refs.as_slice(), |refs| {
            refs.iter()
                .map(|r| format!("{} {}..{}\n", r.name, r.start, r.end))
                .collect()
        })
    }

    pub fn vars(&self, text: &str) -> Result<String, CliError> {
        let vars = self.toolbar_vars(text);
        self.format.render(&vars, |vars| {
            vars.iter().map(|(k, v)| format!("{}={}\n", k, v)).collect()
        })
    }

    /// Expand `text`, looking names up in `--var` pairs, then in the declarations of `toolbar`,
    /// then in the home vars, then (for `$NAME`) in the environment.
    pub fn expand(
        &self,
        text: &str,
        var_args: &[String],
        toolbar: Option<&str>,
    ) -> Result<String, CliError> {
        let mut vars = toolbar.map(|t| self.toolbar_vars(t)).unwrap_or_default();
        for arg in var_args {
            let (name, value) = arg
                .split_once('=')
                .filter(|(name, _)| name.starts_with(&['$', '~'][..]) && name.len() > 1)
                .ok_or_else(|| CliError::InvalidVar(arg.clone()))?;
            vars.insert(name.to_string(), value.to_string());
        }

        let refs = VarRefScanner::new(self.options).scan_str(text);
        let expanded = expand_var_refs(text, &refs, |name| {
            vars.get(name)
                .cloned()
                .or_else(|| self.home_var(name))
                .or_else(|| name.strip_prefix('$').and_then(|n| env::var(n).ok()))
        });
        let out = Expansion {
            source: text,
            expanded,
        };
        self.format.render(&out, |out| format!("{}\n", out.expanded))
    }

    pub fn encode(&self, path: &str) -> Result<String, CliError> {
        let encoded = self.home_vars.encode(path);
        self.format.render(&encoded, |s| format!("{}\n", s))
    }

    pub fn decode(&self, name: &str) -> Result<String, CliError> {
        let decoded = self.home_vars.decode(name);
        self.format.render(&decoded, |s| format!("{}\n", s))
    }

    pub fn position(&self, buffer: &[u8], offset: usize) -> Result<String, CliError> {
        let pos = OffsetTranslator::new(buffer).byte_offset_to_position(offset)?;
        self.format.render(&pos, |pos| format!("{}\n", pos))
    }

    pub fn offset(&self, buffer: &[u8], pos: Position) -> Result<String, CliError> {
        let offset = OffsetTranslator::new(buffer).position_to_byte_offset(pos)?;
        self.format.render(&offset, |offset| format!("{}\n", offset))
    }

    pub fn range(&self, buffer: &[u8], range: Range) -> Result<String, CliError> {
        let (offset, len) = OffsetTranslator::new(buffer).range_to_byte_offsets(range)?;
        let span = ByteSpan { offset, len };
        self.format
            .render(&span, |span| format!("{} {}\n", span.offset, span.len))
    }

    fn toolbar_vars(&self, text: &str) -> VarMap {
        let doc = Tokenizer::new(self.options).tokenize(text);
        parse_vars(&doc, &VarRefScanner::new(self.options))
    }

    fn home_var(&self, name: &str) -> Option<String> {
        self.home_vars
            .entries()
            .iter()
            .find(|e| e.key == name)
            .map(|e| e.path.clone())
    }
}
