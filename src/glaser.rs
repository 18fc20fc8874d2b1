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
Condensaciones intersticiales (método de Glaser)
================================================

Localización de los planos de condensación y cálculo de las cantidades de vapor condensadas o
evaporadas en ellos, según el método de Glaser (UNE-EN ISO 13788).

En coordenadas de espesor de aire equivalente (x) y presión de vapor (y), los planos de
condensación son los vértices de la envolvente convexa inferior de la curva formada por:

- la presión de vapor en la superficie exterior (x = 0)
- la presión de saturación en cada interfase entre capas
- la presión de vapor en la superficie interior (x = S_total)

La diferencia entre el flujo de vapor que sale y el que llega a cada plano es la tasa de
condensación (positiva) o de evaporación (negativa) en ese plano.
*/

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    envelope::Envelope,
    error::CondensaError,
    materials::MaterialsDB,
    psicrom::vapour_transfer_rate,
    types::Climate,
    vecops::{veckmul, vecsum},
};

/// Segundos en un mes de 30 días
pub const SECONDS_PER_MONTH: f64 = 2_592_000.0;

/// Punto del diagrama de Glaser
///
/// x: espesor de aire equivalente acumulado desde la superficie exterior [m]
/// y: presión de vapor [Pa]
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Espesor de aire equivalente acumulado [m]
    pub x: f64,
    /// Presión de vapor [Pa]
    pub y: f64,
}

impl Point {
    /// Nuevo punto
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.1})", self.x, self.y)
    }
}

/// ¿Forman los puntos p, q, r un giro a la izquierda?
///
/// Se evalúa el signo del determinante (área orientada del triángulo pqr). Los puntos
/// alineados no forman giro a la izquierda.
pub fn is_left_turn(p: &Point, q: &Point, r: &Point) -> bool {
    let det = (q.x * r.y + p.x * q.y + r.x * p.y) - (q.x * p.y + r.x * q.y + p.x * r.y);
    det > 0.0
}

/// Índices de los vértices de la envolvente convexa inferior de una lista de puntos
/// ordenados por x creciente. Incluye siempre el primer y el último punto.
pub fn lower_hull_indices(points: &[Point]) -> Vec<usize> {
    if points.len() <= 2 {
        return (0..points.len()).collect();
    }
    let mut hull: Vec<usize> = vec![0, 1];
    for idx in 2..points.len() {
        hull.push(idx);
        while hull.len() > 2 {
            let n = hull.len();
            let (p, q, r) = (
                &points[hull[n - 3]],
                &points[hull[n - 2]],
                &points[hull[n - 1]],
            );
            if is_left_turn(p, q, r) {
                break;
            }
            hull.remove(n - 2);
        }
    }
    hull
}

/// Envolvente convexa inferior de una lista de puntos ordenados por x creciente
pub fn lower_hull(points: &[Point]) -> Vec<Point> {
    lower_hull_indices(points)
        .into_iter()
        .map(|idx| points[idx])
        .collect()
}

/// Tasas de condensación (+) o evaporación (-) [g/(m2.s)] en los planos interiores
///
/// Para cada terna de planos consecutivos (a, b, c): g_b = g(b->c) - g(a->b).
/// Devuelve una lista vacía si no hay planos interiores.
pub fn mass_fluxes(planes: &[Point]) -> Result<Vec<f64>, CondensaError> {
    planes
        .iter()
        .tuple_windows::<(_, _, _)>()
        .map(|(a, b, c)| {
            let g_out = vapour_transfer_rate(b.y, c.y, b.x, c.x)?;
            let g_in = vapour_transfer_rate(a.y, b.y, a.x, b.x)?;
            Ok(g_out - g_in)
        })
        .collect()
}

/// Puntos del diagrama de Glaser para un cerramiento y unas condiciones climáticas
///
/// Presión de vapor en las superficies exterior e interior y presión de saturación en las
/// interfases entre capas, en función del espesor de aire equivalente acumulado.
/// Longitud: número de capas + 1
pub fn glaser_points(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
) -> Result<Vec<Point>, CondensaError> {
    let n = envelope.layers().len();
    let x = envelope.interface_positions(db)?;
    let p = envelope.vapour_pressures(db, ext, int)?;
    let psat = envelope.saturation_pressures(db, ext.temp, int.temp)?;

    let y: Vec<f64> = std::iter::once(p[1])
        .chain(psat[2..=n].iter().cloned())
        .chain(std::iter::once(p[n + 2]))
        .collect();

    Ok(x.into_iter()
        .zip(y.into_iter())
        .map(|(x, y)| Point::new(x, y))
        .collect())
}

/// Resultado del cálculo de condensaciones o evaporaciones
///
/// Condensation (or evaporation) result: planes of the lower envelope and mass fluxes at the
/// interior planes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condensation {
    /// Planos de la envolvente, incluidas las superficies exterior e interior
    pub planes: Vec<Point>,
    /// Posición de cada plano en la lista de puntos del diagrama de Glaser (0 = sup. exterior)
    pub indices: Vec<usize>,
    /// Tasa de condensación (+) o evaporación (-) en cada plano interior [g/(m2.s)]
    pub g: Vec<f64>,
}

impl Condensation {
    fn from_indices(points: &[Point], indices: Vec<usize>) -> Result<Self, CondensaError> {
        let planes: Vec<Point> = indices.iter().map(|&idx| points[idx]).collect();
        let g = mass_fluxes(&planes)?;
        Ok(Self { planes, indices, g })
    }

    /// Tasa total de condensación (+) o evaporación (-) [g/(m2.s)]
    pub fn total(&self) -> f64 {
        vecsum(&self.g)
    }

    /// Cantidad mensual en cada plano interior [g/(m2.mes)]
    pub fn monthly_g(&self) -> Vec<f64> {
        veckmul(&self.g, SECONDS_PER_MONTH)
    }

    /// Cantidad total mensual [g/(m2.mes)]
    pub fn monthly_total(&self) -> f64 {
        self.total() * SECONDS_PER_MONTH
    }

    /// ¿Hay acumulación neta de agua?
    pub fn has_condensation(&self) -> bool {
        self.total() > 0.0
    }

    /// Interfases (índices en el diagrama de Glaser) de los planos interiores.
    ///
    /// Pueden usarse como planos de evaporación en un periodo posterior.
    pub fn interfaces(&self) -> Vec<usize> {
        if self.indices.len() <= 2 {
            return Vec::new();
        }
        self.indices[1..self.indices.len() - 1].to_vec()
    }
}

/// Condensaciones intersticiales de un cerramiento
///
/// Los planos de condensación se obtienen como envolvente convexa inferior del diagrama de
/// Glaser.
pub fn condensation(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
) -> Result<Condensation, CondensaError> {
    let points = glaser_points(envelope, db, ext, int)?;
    let indices = lower_hull_indices(&points);
    Condensation::from_indices(&points, indices)
}

/// Evaporación en las interfases indicadas
///
/// Los planos no se calculan, se toman de `interfaces` (índices en el diagrama de Glaser,
/// entre 1 y el número de capas - 1), normalmente los planos de condensación de un periodo
/// anterior.
pub fn evaporation(
    envelope: &Envelope,
    db: &MaterialsDB,
    ext: &Climate,
    int: &Climate,
    interfaces: &[usize],
) -> Result<Condensation, CondensaError> {
    let points = glaser_points(envelope, db, ext, int)?;
    let last = points.len() - 1;
    if let Some(bad) = interfaces.iter().find(|&&i| i == 0 || i >= last) {
        return Err(CondensaError::InvalidArgument(format!(
            "interfase {} fuera de rango (1 a {})",
            bad,
            last.saturating_sub(1)
        )));
    }
    let indices: Vec<usize> = std::iter::once(0)
        .chain(interfaces.iter().cloned())
        .chain(std::iter::once(last))
        .collect();
    Condensation::from_indices(&points, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Layer;
    use pretty_assertions::assert_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn left_turn() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 0.0);
        assert!(is_left_turn(&p, &q, &Point::new(2.0, 1.0)));
        assert!(!is_left_turn(&p, &q, &Point::new(2.0, -1.0)));
        // Alineados
        assert!(!is_left_turn(&p, &q, &Point::new(2.0, 0.0)));
    }

    #[test]
    fn hull_without_interior_planes() {
        // Curva por encima de la recta que une los extremos
        let points = pts(&[(0.0, 800.0), (1.0, 1500.0), (2.0, 1600.0), (3.0, 1200.0)]);
        assert_eq!(lower_hull_indices(&points), vec![0, 3]);
        assert_eq!(mass_fluxes(&lower_hull(&points)).unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn hull_with_interior_planes() {
        let points = pts(&[
            (0.0, 800.0),
            (1.0, 700.0),
            (2.0, 750.0),
            (3.0, 1500.0),
            (4.0, 1200.0),
        ]);
        let idx = lower_hull_indices(&points);
        assert_eq!(idx, vec![0, 1, 2, 4]);
        let hull = lower_hull(&points);
        // Todos los puntos quedan sobre o por encima de la envolvente
        for p in &points {
            let seg = hull
                .windows(2)
                .find(|w| w[0].x <= p.x && p.x <= w[1].x)
                .unwrap();
            let yl = seg[0].y + (seg[1].y - seg[0].y) * (p.x - seg[0].x) / (seg[1].x - seg[0].x);
            assert!(p.y >= yl - 1e-9);
        }
    }

    #[test]
    fn hull_short_inputs() {
        assert_eq!(lower_hull_indices(&[]), Vec::<usize>::new());
        assert_eq!(lower_hull_indices(&pts(&[(0.0, 1.0)])), vec![0]);
        assert_eq!(lower_hull_indices(&pts(&[(0.0, 1.0), (1.0, 2.0)])), vec![0, 1]);
    }

    #[test]
    fn fluxes() {
        let planes = pts(&[(0.0, 800.0), (1.0, 900.0), (3.0, 1300.0)]);
        let g = mass_fluxes(&planes).unwrap();
        assert_eq!(g.len(), 1);
        // g(b->c) = 2e-7 * 400 / 2 = 4e-5; g(a->b) = 2e-7 * 100 / 1 = 2e-5
        assert!((g[0] - 2.0e-5).abs() < 1e-15);
    }

    #[test]
    fn fluxes_coincident_planes() {
        let planes = pts(&[(0.0, 800.0), (1.0, 900.0), (1.0, 950.0)]);
        assert!(matches!(
            mass_fluxes(&planes),
            Err(CondensaError::DivisionByZero(_))
        ));
    }

    fn test_case() -> (Envelope, MaterialsDB) {
        let db: MaterialsDB = "Ladrillo, PROPERTIES, 0.5, 10
Aislante, PROPERTIES, 0.04, 20
Enlucido, PROPERTIES, 0.57, 6"
            .parse()
            .unwrap();
        let envelope = Envelope::new(
            "Muro",
            "",
            vec![
                Layer::new("Ladrillo", 0.11).unwrap(),
                Layer::new("Aislante", 0.04).unwrap(),
                Layer::new("Ladrillo", 0.04).unwrap(),
                Layer::new("Enlucido", 0.01).unwrap(),
            ],
        )
        .unwrap();
        (envelope, db)
    }

    #[test]
    fn glaser_diagram() {
        let (envelope, db) = test_case();
        let ext = Climate::new(0.0, 95.0).unwrap();
        let int = Climate::new(20.0, 60.0).unwrap();
        let points = glaser_points(&envelope, &db, &ext, &int).unwrap();
        assert_eq!(points.len(), envelope.layers().len() + 1);
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[0].y, ext.vapour_pressure().unwrap());
        assert_eq!(points[4].y, int.vapour_pressure().unwrap());
        let psat = envelope.saturation_pressures(&db, 0.0, 20.0).unwrap();
        assert_eq!(points[1].y, psat[2]);
        assert_eq!(points[3].y, psat[4]);
    }

    #[test]
    fn condensation_and_evaporation() {
        let (envelope, db) = test_case();
        let ext = Climate::new(0.0, 95.0).unwrap();
        let int = Climate::new(20.0, 60.0).unwrap();
        let cond = condensation(&envelope, &db, &ext, &int).unwrap();
        assert_eq!(cond.g.len(), cond.planes.len() - 2);
        assert_eq!(cond.indices[0], 0);
        assert_eq!(*cond.indices.last().unwrap(), 4);
        assert_eq!(cond.indices, vec![0, 1, 4]);
        assert_eq!(cond.interfaces(), vec![1]);
        assert!(cond.has_condensation());
        assert!((cond.monthly_total() - vecsum(&cond.monthly_g())).abs() < 1e-9);

        // Repetir el cálculo en los planos de condensación da el mismo resultado
        let evap = evaporation(&envelope, &db, &ext, &int, &cond.interfaces()).unwrap();
        assert_eq!(evap, cond);

        // Interfases fuera de rango
        assert!(evaporation(&envelope, &db, &ext, &int, &[0]).is_err());
        assert!(evaporation(&envelope, &db, &ext, &int, &[4]).is_err());
        // Interfase repetida
        assert!(matches!(
            evaporation(&envelope, &db, &ext, &int, &[2, 2]),
            Err(CondensaError::DivisionByZero(_))
        ));
    }

    #[test]
    fn no_condensation_in_mild_climate() {
        let (envelope, db) = test_case();
        let ext = Climate::new(15.0, 60.0).unwrap();
        let int = Climate::new(20.0, 50.0).unwrap();
        let cond = condensation(&envelope, &db, &ext, &int).unwrap();
        assert_eq!(cond.indices, vec![0, 4]);
        assert!(cond.g.is_empty());
        assert_eq!(cond.total(), 0.0);
        assert!(!cond.has_condensation());
        assert!(cond.interfaces().is_empty());
    }
}
