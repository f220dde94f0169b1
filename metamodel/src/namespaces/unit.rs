//! `unit:` namespace: the Unit and QuantityKind catalog.
//!
//! Units referenced by Measurement, Quantifiable and Duration
//! Characteristics are looked up here by local name before a loader falls
//! back to a unit defined in a model. Each unit names its symbol, its
//! UN/CEFACT common code, optionally a reference unit with a conversion
//! factor, and the quantity kinds it measures.

use crate::model::iris::*;
use crate::model::{
    Class, Individual, IndividualValue, Namespace, NamespaceModule, Property, PropertyKind,
};

/// Returns the `unit:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "unit",
            iri: NS_UNIT,
            label: "SAMM Unit Catalog",
            comment: "Units of measurement and the quantity kinds they measure.",
        },
        classes: classes(),
        properties: properties(),
        individuals: quantity_kinds().into_iter().chain(units()).collect(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: UNIT_UNIT,
            label: "Unit",
            comment: "A unit of measurement.",
            subclass_of: &[],
        },
        Class {
            id: UNIT_QUANTITY_KIND,
            label: "QuantityKind",
            comment: "A kind of quantity, e.g. mass or time.",
            subclass_of: &[],
        },
    ]
}

const fn attribute(
    id: &'static str,
    label: &'static str,
    comment: &'static str,
    kind: PropertyKind,
    functional: bool,
    range: &'static str,
) -> Property {
    Property {
        id,
        label,
        comment,
        kind,
        functional,
        domain: Some(UNIT_UNIT),
        range,
    }
}

fn properties() -> Vec<Property> {
    vec![
        attribute(
            UNIT_SYMBOL,
            "symbol",
            "The symbol of the unit.",
            PropertyKind::Datatype,
            true,
            XSD_STRING,
        ),
        attribute(
            UNIT_CODE,
            "code",
            "The UN/CEFACT common code of the unit.",
            PropertyKind::Datatype,
            true,
            XSD_STRING,
        ),
        attribute(
            UNIT_REFERENCE_UNIT,
            "referenceUnit",
            "The unit this unit is defined in terms of.",
            PropertyKind::Object,
            true,
            UNIT_UNIT,
        ),
        attribute(
            UNIT_CONVERSION_FACTOR,
            "conversionFactor",
            "The factor relating this unit to its reference unit.",
            PropertyKind::Datatype,
            true,
            XSD_STRING,
        ),
        attribute(
            UNIT_QUANTITY_KIND_ATTR,
            "quantityKind",
            "A quantity kind measured by this unit.",
            PropertyKind::Object,
            false,
            UNIT_QUANTITY_KIND,
        ),
    ]
}

const fn quantity_kind(id: &'static str, label: &'static str) -> Individual {
    Individual {
        id,
        type_: UNIT_QUANTITY_KIND,
        label,
        comment: "",
        properties: &[],
    }
}

fn quantity_kinds() -> Vec<Individual> {
    vec![
        quantity_kind(unit!("mass"), "mass"),
        quantity_kind(unit!("length"), "length"),
        quantity_kind(unit!("time"), "time"),
        quantity_kind(unit!("thermodynamicTemperature"), "thermodynamic temperature"),
        quantity_kind(unit!("celsiusTemperature"), "Celsius temperature"),
        quantity_kind(unit!("voltage"), "voltage"),
        quantity_kind(unit!("electricCurrent"), "electric current"),
        quantity_kind(unit!("power"), "power"),
        quantity_kind(unit!("force"), "force"),
        quantity_kind(unit!("pressure"), "pressure"),
        quantity_kind(unit!("volume"), "volume"),
        quantity_kind(unit!("velocity"), "velocity"),
        quantity_kind(unit!("frequency"), "frequency"),
        quantity_kind(unit!("energy"), "energy"),
        quantity_kind(unit!("dimensionless"), "dimensionless"),
    ]
}

const fn unit(
    id: &'static str,
    label: &'static str,
    properties: &'static [(&'static str, IndividualValue)],
) -> Individual {
    Individual {
        id,
        type_: UNIT_UNIT,
        label,
        comment: "",
        properties,
    }
}

use IndividualValue::{IriRef, Str};

fn units() -> Vec<Individual> {
    vec![
        unit(
            unit!("kilogram"),
            "kilogram",
            &[
                (UNIT_SYMBOL, Str("kg")),
                (UNIT_CODE, Str("KGM")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("mass"))),
            ],
        ),
        unit(
            unit!("gram"),
            "gram",
            &[
                (UNIT_SYMBOL, Str("g")),
                (UNIT_CODE, Str("GRM")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("kilogram"))),
                (UNIT_CONVERSION_FACTOR, Str("10⁻³ kg")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("mass"))),
            ],
        ),
        unit(
            unit!("tonneMetricTon"),
            "tonne (metric ton)",
            &[
                (UNIT_SYMBOL, Str("t")),
                (UNIT_CODE, Str("TNE")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("kilogram"))),
                (UNIT_CONVERSION_FACTOR, Str("10³ kg")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("mass"))),
            ],
        ),
        unit(
            unit!("metre"),
            "metre",
            &[
                (UNIT_SYMBOL, Str("m")),
                (UNIT_CODE, Str("MTR")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("length"))),
            ],
        ),
        unit(
            unit!("millimetre"),
            "millimetre",
            &[
                (UNIT_SYMBOL, Str("mm")),
                (UNIT_CODE, Str("MMT")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("metre"))),
                (UNIT_CONVERSION_FACTOR, Str("10⁻³ m")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("length"))),
            ],
        ),
        unit(
            unit!("centimetre"),
            "centimetre",
            &[
                (UNIT_SYMBOL, Str("cm")),
                (UNIT_CODE, Str("CMT")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("metre"))),
                (UNIT_CONVERSION_FACTOR, Str("10⁻² m")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("length"))),
            ],
        ),
        unit(
            unit!("kilometre"),
            "kilometre",
            &[
                (UNIT_SYMBOL, Str("km")),
                (UNIT_CODE, Str("KMT")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("metre"))),
                (UNIT_CONVERSION_FACTOR, Str("10³ m")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("length"))),
            ],
        ),
        unit(
            unit!("secondUnitOfTime"),
            "second [unit of time]",
            &[
                (UNIT_SYMBOL, Str("s")),
                (UNIT_CODE, Str("SEC")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("time"))),
            ],
        ),
        unit(
            unit!("millisecond"),
            "millisecond",
            &[
                (UNIT_SYMBOL, Str("ms")),
                (UNIT_CODE, Str("C26")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("secondUnitOfTime"))),
                (UNIT_CONVERSION_FACTOR, Str("10⁻³ s")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("time"))),
            ],
        ),
        unit(
            unit!("minuteUnitOfTime"),
            "minute [unit of time]",
            &[
                (UNIT_SYMBOL, Str("min")),
                (UNIT_CODE, Str("MIN")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("secondUnitOfTime"))),
                (UNIT_CONVERSION_FACTOR, Str("60 s")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("time"))),
            ],
        ),
        unit(
            unit!("hour"),
            "hour",
            &[
                (UNIT_SYMBOL, Str("h")),
                (UNIT_CODE, Str("HUR")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("secondUnitOfTime"))),
                (UNIT_CONVERSION_FACTOR, Str("3600 s")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("time"))),
            ],
        ),
        unit(
            unit!("day"),
            "day",
            &[
                (UNIT_SYMBOL, Str("d")),
                (UNIT_CODE, Str("DAY")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("secondUnitOfTime"))),
                (UNIT_CONVERSION_FACTOR, Str("86400 s")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("time"))),
            ],
        ),
        unit(
            unit!("kelvin"),
            "kelvin",
            &[
                (UNIT_SYMBOL, Str("K")),
                (UNIT_CODE, Str("KEL")),
                (
                    UNIT_QUANTITY_KIND_ATTR,
                    IriRef(unit!("thermodynamicTemperature")),
                ),
            ],
        ),
        unit(
            unit!("degreeCelsius"),
            "degree Celsius",
            &[
                (UNIT_SYMBOL, Str("°C")),
                (UNIT_CODE, Str("CEL")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("kelvin"))),
                (UNIT_CONVERSION_FACTOR, Str("1 × K")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("celsiusTemperature"))),
            ],
        ),
        unit(
            unit!("volt"),
            "volt",
            &[
                (UNIT_SYMBOL, Str("V")),
                (UNIT_CODE, Str("VLT")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("voltage"))),
            ],
        ),
        unit(
            unit!("ampere"),
            "ampere",
            &[
                (UNIT_SYMBOL, Str("A")),
                (UNIT_CODE, Str("AMP")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("electricCurrent"))),
            ],
        ),
        unit(
            unit!("watt"),
            "watt",
            &[
                (UNIT_SYMBOL, Str("W")),
                (UNIT_CODE, Str("WTT")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("power"))),
            ],
        ),
        unit(
            unit!("kilowatt"),
            "kilowatt",
            &[
                (UNIT_SYMBOL, Str("kW")),
                (UNIT_CODE, Str("KWT")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("watt"))),
                (UNIT_CONVERSION_FACTOR, Str("10³ W")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("power"))),
            ],
        ),
        unit(
            unit!("newton"),
            "newton",
            &[
                (UNIT_SYMBOL, Str("N")),
                (UNIT_CODE, Str("NEW")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("force"))),
            ],
        ),
        unit(
            unit!("pascal"),
            "pascal",
            &[
                (UNIT_SYMBOL, Str("Pa")),
                (UNIT_CODE, Str("PAL")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("pressure"))),
            ],
        ),
        unit(
            unit!("bar"),
            "bar [unit of pressure]",
            &[
                (UNIT_SYMBOL, Str("bar")),
                (UNIT_CODE, Str("BAR")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("pascal"))),
                (UNIT_CONVERSION_FACTOR, Str("10⁵ Pa")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("pressure"))),
            ],
        ),
        unit(
            unit!("cubicMetre"),
            "cubic metre",
            &[
                (UNIT_SYMBOL, Str("m³")),
                (UNIT_CODE, Str("MTQ")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("volume"))),
            ],
        ),
        unit(
            unit!("litre"),
            "litre",
            &[
                (UNIT_SYMBOL, Str("l")),
                (UNIT_CODE, Str("LTR")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("cubicMetre"))),
                (UNIT_CONVERSION_FACTOR, Str("10⁻³ m³")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("volume"))),
            ],
        ),
        unit(
            unit!("metrePerSecond"),
            "metre per second",
            &[
                (UNIT_SYMBOL, Str("m/s")),
                (UNIT_CODE, Str("MTS")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("velocity"))),
            ],
        ),
        unit(
            unit!("kilometrePerHour"),
            "kilometre per hour",
            &[
                (UNIT_SYMBOL, Str("km/h")),
                (UNIT_CODE, Str("KMH")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("metrePerSecond"))),
                (UNIT_CONVERSION_FACTOR, Str("0.277778 m/s")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("velocity"))),
            ],
        ),
        unit(
            unit!("hertz"),
            "hertz",
            &[
                (UNIT_SYMBOL, Str("Hz")),
                (UNIT_CODE, Str("HTZ")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("frequency"))),
            ],
        ),
        unit(
            unit!("joule"),
            "joule",
            &[
                (UNIT_SYMBOL, Str("J")),
                (UNIT_CODE, Str("JOU")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("energy"))),
            ],
        ),
        unit(
            unit!("kilowattHour"),
            "kilowatt hour",
            &[
                (UNIT_SYMBOL, Str("kW·h")),
                (UNIT_CODE, Str("KWH")),
                (UNIT_REFERENCE_UNIT, IriRef(unit!("joule"))),
                (UNIT_CONVERSION_FACTOR, Str("3.6 × 10⁶ J")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("energy"))),
            ],
        ),
        unit(
            unit!("percent"),
            "percent",
            &[
                (UNIT_SYMBOL, Str("%")),
                (UNIT_CODE, Str("P1")),
                (UNIT_QUANTITY_KIND_ATTR, IriRef(unit!("dimensionless"))),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_a_known_quantity_kind() {
        let kinds: Vec<_> = quantity_kinds().iter().map(|k| k.id).collect();
        for unit in units() {
            let mut count = 0;
            for value in unit.values(UNIT_QUANTITY_KIND_ATTR) {
                count += 1;
                match value {
                    IriRef(iri) => assert!(kinds.contains(iri), "{} -> {}", unit.id, iri),
                    other => panic!("unexpected quantity kind value {other:?}"),
                }
            }
            assert!(count > 0, "{} has no quantity kind", unit.id);
        }
    }

    #[test]
    fn reference_units_are_in_the_catalog() {
        let all = units();
        for unit in &all {
            for value in unit.values(UNIT_REFERENCE_UNIT) {
                if let IriRef(iri) = value {
                    assert!(all.iter().any(|u| u.id == *iri), "{} -> {}", unit.id, iri);
                }
            }
        }
    }
}
