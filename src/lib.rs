// Copyright (c) 2018-2022  Ministerio de Fomento
//                          Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

// Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>,
//            Daniel Jiménez González <dani@ietcc.csic.es>

/*!
Condensaciones
==============

This crate provides a library and binary that **computes steady-state heat and water vapour
transfer through multi-layer building envelopes** and checks for surface and interstitial
condensation using the Glaser method, as described in the UNE-EN ISO 13788 standard
*Hygrothermal performance of building components and building elements*.

It is oriented towards the assessment of building envelopes under the spanish building code
(CTE DB-HE) and, thus, uses specific naming conventions and default values best suited for
that purpose.

It also holds the following assumptions:

- steady-state, one-dimensional heat and vapour transfer
- no moisture storage or liquid transport (capillarity) in materials
- constant material properties
- 30 day months for the conversion of condensation rates to monthly amounts

Este *crate* proporciona una biblioteca y un programa que **calcula la transmisión de calor y
vapor de agua en régimen estacionario a través de cerramientos multicapa** y comprueba la
existencia de condensaciones superficiales e intersticiales mediante el método de Glaser,
según la norma UNE-EN ISO 13788.

Este software está orientado a la evaluación de cerramientos dentro del marco de la normativa
española de edificación (Código Técnico de la Edificación CTE, DB-HE) y, así, adopta
nomenclatura y valores por defecto adaptados a ese propósito.

También realiza los siguientes supuestos:

- transmisión de calor y vapor unidimensional y en régimen estacionario
- no se considera el almacenamiento de humedad ni el transporte de agua líquida
- propiedades de los materiales constantes
- meses de 30 días para obtener cantidades mensuales a partir de tasas de condensación

# Ejemplo

```rust
use condensaciones::{
    condensation, cte,
    types::{Climate, Layer},
    AsCtePlain, Envelope, MaterialsDB,
};

// Catálogo de materiales (nombre, tipo, conductividad o resistencia, mu)
let db: MaterialsDB = "Ladrillo perforado, PROPERTIES, 0.667, 10
Mortero, PROPERTIES, 0.41, 10
EPS, PROPERTIES, 0.0375, 20
Tabique de LH sencillo, PROPERTIES, 0.445, 10
Enlucido de yeso, PROPERTIES, 0.57, 6"
    .parse()
    .unwrap();

// Cerramiento, con capas de exterior a interior (Rse = 0.04, Rsi = 0.13 por defecto)
let muro = Envelope::new(
    "Muro",
    "Fachada de ladrillo con aislamiento intermedio",
    vec![
        Layer::new("Ladrillo perforado", 0.11).unwrap(),
        Layer::new("Mortero", 0.01).unwrap(),
        Layer::new("EPS", 0.03).unwrap(),
        Layer::new("Tabique de LH sencillo", 0.03).unwrap(),
        Layer::new("Enlucido de yeso", 0.01).unwrap(),
    ],
)
.unwrap();

// Condiciones exteriores e interiores (T [ºC], HR [%])
let ext = Climate::new(5.0, 96.0).unwrap();
let int = Climate::new(cte::TINT_DEFAULT, cte::hr_interior(3).unwrap()).unwrap();

// Planos de condensación y cantidad condensada
let cond = condensation(&muro, &db, &ext, &int).unwrap();
assert!((cond.monthly_total() - 31.3975).abs() < 1e-4);

// Comprobación conjunta y visualización compacta
let report = cte::check_envelope(&muro, &db, &ext, &int).unwrap();
assert!(!report.surface_condensation);
assert!(report.interstitial_condensation);
println!("{}", report.to_plain());
```
*/

#![deny(missing_docs)]

mod asplain;
mod envelope;
mod glaser;
mod materials;
mod vecops;

pub mod cte;
pub mod error;
pub mod psicrom;
pub mod types;

pub use asplain::*;
pub use envelope::*;
pub use glaser::*;
pub use materials::*;

/// Número de versión de la librería
///
/// Version number
pub static VERSION: &str = env!("CARGO_PKG_VERSION");
