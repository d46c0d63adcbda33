//! Discriminated unions.
//!
//! A union payload is a flat object: shared base fields, a tag field whose
//! value selects a variant, and one block keyed by that variant. For a union
//! tagged by `region`:
//!
//! ```json
//! { "email": "...", "region": "EU", "eu": { "gdprConsent": true } }
//! ```

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{ErrorKind, ValidationErrors};
use crate::path::FieldPath;
use crate::schema::{type_name, ObjectSchema, Schema};

/// One arm of a discriminated union.
#[derive(Debug)]
pub struct UnionVariant {
    /// Tag value selecting this variant.
    pub tag: String,
    /// Label shown for this variant.
    pub label: String,
    /// Key of the block holding the variant's fields.
    pub block: String,
    /// Schema of the block.
    pub schema: ObjectSchema,
}

/// Schema for a tag-driven union of variant blocks over shared base fields.
///
/// Variant blocks are validated strictly. Blocks belonging to variants other
/// than the selected one are dropped without being validated.
#[derive(Debug)]
pub struct DiscriminatedUnion {
    tag: String,
    base: ObjectSchema,
    variants: Vec<UnionVariant>,
}

impl DiscriminatedUnion {
    /// Creates a union tagged by `tag` over the given base fields.
    pub fn new(tag: impl Into<String>, base: ObjectSchema) -> Self {
        Self {
            tag: tag.into(),
            base,
            variants: Vec::new(),
        }
    }

    /// Adds a variant.
    #[must_use]
    pub fn variant(
        mut self,
        tag: impl Into<String>,
        label: impl Into<String>,
        block: impl Into<String>,
        schema: ObjectSchema,
    ) -> Self {
        self.variants.push(UnionVariant {
            tag: tag.into(),
            label: label.into(),
            block: block.into(),
            schema,
        });
        self
    }

    /// Returns the name of the tag field.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the base schema.
    pub fn base(&self) -> &ObjectSchema {
        &self.base
    }

    /// Returns the variants in declaration order.
    pub fn variants(&self) -> &[UnionVariant] {
        &self.variants
    }

    /// Looks up the variant selected by a tag value.
    pub fn variant_for(&self, tag: &str) -> Option<&UnionVariant> {
        self.variants.iter().find(|v| v.tag == tag)
    }

    fn discriminator_message(&self) -> String {
        let options: Vec<String> = self.variants.iter().map(|v| format!("'{}'", v.tag)).collect();
        format!("Invalid discriminator value. Expected {}", options.join(" | "))
    }
}

impl Schema for DiscriminatedUnion {
    fn validate(&self, value: &Value, path: &FieldPath, errors: &mut ValidationErrors) -> Value {
        let Some(map) = value.as_object() else {
            errors.add(
                path.clone(),
                ErrorKind::FieldFormatInvalid,
                format!("Expected object, received {}", type_name(value)),
            );
            return Value::Null;
        };

        let mut normalized = match self.base.validate(value, path, errors) {
            Value::Object(base) => base,
            _ => Map::new(),
        };

        let tag_path = path.key(&self.tag);
        let Some(variant) = map
            .get(&self.tag)
            .and_then(Value::as_str)
            .and_then(|tag| self.variant_for(tag))
        else {
            errors.add(tag_path, ErrorKind::SchemaMismatch, self.discriminator_message());
            return Value::Object(normalized);
        };

        for other in self.variants.iter().filter(|v| v.block != variant.block) {
            if map.contains_key(&other.block) {
                debug!(
                    active = %variant.tag,
                    block = %other.block,
                    "discarding inactive variant block"
                );
            }
        }

        normalized.insert(self.tag.clone(), Value::String(variant.tag.clone()));
        let block_path = path.key(&variant.block);
        match map.get(&variant.block) {
            Some(block) => {
                let block = variant.schema.validate(block, &block_path, errors);
                normalized.insert(variant.block.clone(), block);
            }
            None => errors.add(block_path, ErrorKind::SchemaMismatch, "Required"),
        }

        Value::Object(normalized)
    }

    fn coerce(&self, value: Value) -> Value {
        let Value::Object(mut map) = self.base.coerce(value) else {
            return Value::Null;
        };
        let variant = map
            .get(&self.tag)
            .and_then(Value::as_str)
            .and_then(|tag| self.variant_for(tag));
        if let Some(variant) = variant {
            let block = map
                .remove(&variant.block)
                .unwrap_or_else(|| Value::Object(Map::new()));
            map.insert(variant.block.clone(), variant.schema.coerce(block));
        }
        Value::Object(map)
    }
}
