use crate::Result;
use anyhow::{Context, bail};
use regex::Regex;
use std::collections::HashMap;

/// One element of a production alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Index of another rule in the grammar.
    Rule(usize),
    Literal(String),
    Epsilon,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub name: String,
    pub alternatives: Vec<Vec<Item>>,
}

/// Validated grammar: every referenced symbol is defined and the start symbol exists.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Vec<Rule>,
    start: usize,
}

impl Grammar {
    /// Parse grammar text.
    ///
    /// Format (one rule per line, `|` continuation lines allowed):
    /// NAME -> ITEM ITEM | "literal" | ε
    ///
    /// Example:
    /// CLASS -> CLASS_LETTER CLASS_NUMBER
    ///        | CLASS_LETTER
    pub fn from_text(text: &str, start: &str) -> Result<Self> {
        let rule_re = Regex::new(r#"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*->(.*)$"#)?;
        let cont_re = Regex::new(r#"^\s*\|(.*)$"#)?;

        // (name, raw right-hand side, line of definition)
        let mut raw: Vec<(String, String, usize)> = Vec::new();
        for (lineno, line) in text.lines().enumerate() {
            let lno = lineno + 1;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if let Some(caps) = rule_re.captures(line) {
                raw.push((caps[1].to_string(), caps[2].to_string(), lno));
            } else if let Some(caps) = cont_re.captures(line) {
                match raw.last_mut() {
                    Some((_, rhs, _)) => {
                        rhs.push_str(" |");
                        rhs.push_str(&caps[1]);
                    }
                    None => bail!("grammar parse error at line {}: continuation before any rule", lno),
                }
            } else {
                bail!("grammar parse error at line {}: cannot parse line: {:?}", lno, line);
            }
        }

        let mut index: HashMap<String, usize> = HashMap::new();
        for (i, (name, _, lno)) in raw.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                bail!("duplicate rule {} in grammar at line {}", name, lno);
            }
        }

        let mut rules = Vec::with_capacity(raw.len());
        for (name, rhs, lno) in &raw {
            let alternatives = parse_alternatives(rhs, &index)
                .with_context(|| format!("bad rule {} at line {}", name, lno))?;
            rules.push(Rule {
                name: name.clone(),
                alternatives,
            });
        }

        let start = match index.get(start) {
            Some(i) => *i,
            None => bail!("grammar does not define start symbol {}", start),
        };

        Ok(Self { rules, start })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn rule(&self, index: usize) -> &Rule {
        &self.rules[index]
    }
}

fn parse_alternatives(rhs: &str, index: &HashMap<String, usize>) -> Result<Vec<Vec<Item>>> {
    // Capture: 1) quoted literal, 2) epsilon, 3) alternation bar, 4) symbol, 5) anything else
    let token_re = Regex::new(r#""([^"]*)"|(ε)|(\|)|([A-Za-z_][A-Za-z0-9_]*)|(\S)"#)?;

    let mut alternatives: Vec<Vec<Item>> = vec![Vec::new()];
    for caps in token_re.captures_iter(rhs) {
        if let Some(lit) = caps.get(1) {
            if lit.as_str().is_empty() {
                bail!("empty literal (use ε for an empty production)");
            }
            push_item(&mut alternatives, Item::Literal(lit.as_str().to_string()));
        } else if caps.get(2).is_some() {
            push_item(&mut alternatives, Item::Epsilon);
        } else if caps.get(3).is_some() {
            alternatives.push(Vec::new());
        } else if let Some(sym) = caps.get(4) {
            let target = match index.get(sym.as_str()) {
                Some(i) => *i,
                None => bail!("reference to undefined symbol {}", sym.as_str()),
            };
            push_item(&mut alternatives, Item::Rule(target));
        } else if let Some(junk) = caps.get(5) {
            bail!("unexpected character {:?}", junk.as_str());
        }
    }

    for alt in &alternatives {
        if alt.is_empty() {
            bail!("empty alternative");
        }
        if alt.len() > 1 && alt.contains(&Item::Epsilon) {
            bail!("ε must be the only item of its alternative");
        }
    }

    Ok(alternatives)
}

fn push_item(alternatives: &mut [Vec<Item>], item: Item) {
    if let Some(current) = alternatives.last_mut() {
        current.push(item);
    }
}
