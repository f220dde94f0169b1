//! Turtle 1.1 serializer for the meta-model vocabulary.
//!
//! Produces a Turtle document containing the prefix declarations, the
//! meta-model classes and attributes, and every built-in individual
//! (characteristics, entities, bound definitions, units, quantity kinds).

use crate::model::iris::{SAMM_DESCRIPTION, SAMM_PREFERRED_NAME};
use crate::model::{IndividualValue, MetaModel};

/// Serializes the complete meta-model vocabulary to a Turtle string.
#[must_use]
pub fn to_turtle(meta: &MetaModel) -> String {
    let mut out = String::with_capacity(64 * 1024);

    out.push_str("@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n");
    out.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    for module in &meta.namespaces {
        out.push_str(&format!(
            "@prefix {}: <{}> .\n",
            module.namespace.prefix, module.namespace.iri
        ));
    }
    out.push('\n');
    out.push_str(&format!("# Meta model version {}\n\n", meta.version));

    for module in &meta.namespaces {
        out.push_str(&format!(
            "# Namespace: {} ({})\n\n",
            module.namespace.prefix,
            module.namespace.label
        ));

        for class in &module.classes {
            let parents: String = class
                .subclass_of
                .iter()
                .map(|iri| format!(" ;\n  rdfs:subClassOf <{iri}>"))
                .collect();
            out.push_str(&format!(
                "<{}>\n  a rdfs:Class ;\n  rdfs:label {}{}{} .\n\n",
                class.id,
                turtle_string(class.label),
                comment_line(class.comment),
                parents
            ));
        }

        for prop in &module.properties {
            let domain = prop
                .domain
                .map(|d| format!(" ;\n  rdfs:domain <{d}>"))
                .unwrap_or_default();
            out.push_str(&format!(
                "<{}>\n  a rdf:Property ;\n  rdfs:label {}{}{} ;\n  rdfs:range <{}> .\n\n",
                prop.id,
                turtle_string(prop.label),
                comment_line(prop.comment),
                domain,
                prop.range
            ));
        }

        for ind in &module.individuals {
            let mut block = format!(
                "<{}>\n  a <{}> ;\n  <{}> {}@en",
                ind.id,
                ind.type_,
                SAMM_PREFERRED_NAME,
                turtle_string(ind.label)
            );
            if !ind.comment.is_empty() {
                block.push_str(&format!(
                    " ;\n  <{}> {}@en",
                    SAMM_DESCRIPTION,
                    turtle_string(ind.comment)
                ));
            }
            for (prop_iri, value) in ind.properties {
                block.push_str(&format!(
                    " ;\n  <{}> {}",
                    prop_iri,
                    individual_value_to_turtle(value)
                ));
            }
            block.push_str(" .\n\n");
            out.push_str(&block);
        }
    }

    out
}

fn comment_line(comment: &str) -> String {
    if comment.is_empty() {
        String::new()
    } else {
        format!(" ;\n  rdfs:comment {}", turtle_string(comment))
    }
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

fn individual_value_to_turtle(value: &IndividualValue) -> String {
    match value {
        IndividualValue::Str(s) => turtle_string(s),
        IndividualValue::LangStr(s, lang) => format!("{}@{}", turtle_string(s), lang),
        IndividualValue::Int(i) => format!("\"{i}\"^^xsd:integer"),
        IndividualValue::Bool(b) => format!("\"{b}\"^^xsd:boolean"),
        IndividualValue::Typed(lexical, datatype) => {
            format!("{}^^<{}>", turtle_string(lexical), datatype)
        }
        IndividualValue::IriRef(iri) => format!("<{iri}>"),
        IndividualValue::List(items) => {
            let mut result = "( ".to_owned();
            for item in *items {
                result.push_str(&format!("<{item}> "));
            }
            result.push(')');
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::iris::*;

    #[test]
    fn contains_all_namespace_prefixes() {
        let meta = MetaModel::full();
        let turtle = to_turtle(meta);
        for module in &meta.namespaces {
            assert!(
                turtle.contains(&format!("@prefix {}:", module.namespace.prefix)),
                "Missing prefix declaration for '{}'",
                module.namespace.prefix
            );
        }
    }

    #[test]
    fn built_in_entities_carry_property_lists() {
        let turtle = to_turtle(MetaModel::full());
        assert!(turtle.contains(&format!("<{SAMM_E_TIME_SERIES_ENTITY}>")));
        assert!(turtle.contains(&format!("( <{SAMM_E_TIMESTAMP}> <{SAMM_E_VALUE}> )")));
    }

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(turtle_string("a \"b\"\nc"), "\"a \\\"b\\\"\\nc\"");
    }

    #[test]
    fn language_tagged_values() {
        let value = IndividualValue::LangStr("Gewicht", "de");
        assert_eq!(individual_value_to_turtle(&value), "\"Gewicht\"@de");
    }
}
