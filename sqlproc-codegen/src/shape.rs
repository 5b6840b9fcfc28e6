//! Call-argument shapes.
//!
//! Every emitter renders its parameter list from the same [`ArgumentShape`],
//! so the generated runtime modules and declarations always agree on arity
//! and order.

use std::collections::HashSet;

use sqlproc_core::ParamType;
use sqlproc_source::{Parameters, Position};

/// One argument of a generated procedure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSlot {
    pub position: Position,
    /// Name shown to callers in declarations
    pub exposed_name: String,
    /// `None` for a position that was never declared
    pub ty: Option<ParamType>,
    pub optional: bool,
    pub description: Option<String>,
}

impl ArgumentSlot {
    fn undeclared(position: Position) -> Self {
        Self {
            position,
            exposed_name: position.key(),
            ty: None,
            optional: false,
            description: None,
        }
    }

    /// The function argument name (`$n`).
    pub fn positional_key(&self) -> String {
        self.position.key()
    }

    /// The local name the initializer binds this slot to.
    pub fn binding(&self) -> String {
        format!("${}", self.exposed_name)
    }

    pub fn is_declared(&self) -> bool {
        self.ty.is_some()
    }
}

/// Dense argument list covering positions `$1..$N`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentShape {
    slots: Vec<ArgumentSlot>,
}

impl ArgumentShape {
    /// Derive the shape from a parameter model.
    ///
    /// `N` is the highest declared position; undeclared positions below it
    /// become untyped slots. When several declarations share an alias only
    /// the lowest position keeps it, the others are exposed under their
    /// positional key.
    pub fn from_params(params: &Parameters) -> Self {
        let max = params.keys().map(|p| p.get()).max().unwrap_or(0);
        let mut seen_aliases = HashSet::new();

        let slots = (1..=max)
            .map(|n| {
                let position = Position::new(n);
                let Some(decl) = params.get(&position) else {
                    return ArgumentSlot::undeclared(position);
                };

                let exposed_name = match &decl.alias {
                    Some(alias) if seen_aliases.insert(alias.as_str()) => alias.clone(),
                    _ => position.key(),
                };

                ArgumentSlot {
                    position,
                    exposed_name,
                    ty: Some(decl.ty),
                    optional: decl.optional,
                    description: decl.description.clone(),
                }
            })
            .collect();

        Self { slots }
    }

    pub fn slots(&self) -> &[ArgumentSlot] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &ArgumentSlot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Positions below the maximum that have no declaration.
    pub fn gaps(&self) -> impl Iterator<Item = Position> + '_ {
        self.slots
            .iter()
            .filter(|slot| !slot.is_declared())
            .map(|slot| slot.position)
    }

    /// Comma-joined function arguments: `$1,$2`.
    pub fn args(&self) -> String {
        self.slots
            .iter()
            .map(ArgumentSlot::positional_key)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Array-destructuring initializer binding every slot to its local name.
    ///
    /// Empty when the shape has no slots.
    pub fn initializer(&self) -> String {
        if self.slots.is_empty() {
            return String::new();
        }

        let bindings: Vec<_> = self.slots.iter().map(ArgumentSlot::binding).collect();
        format!("const[{}]=[{}];", bindings.join(","), self.args())
    }
}
