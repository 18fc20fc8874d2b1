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
Cerramientos
============

Define el tipo Envelope (cerramiento multicapa) y el cálculo de sus propiedades derivadas:

- resistencias térmicas de capas y superficies, resistencia total y transmitancia térmica
- espesores de aire equivalentes para la difusión del vapor
- perfiles de temperatura, presión de vapor y presión de saturación

Las capas se ordenan de exterior a interior. Las propiedades derivadas no se almacenan, se
calculan en cada consulta a partir del catálogo de materiales.
*/

use std::convert::TryFrom;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    cte::{RSE_DEFAULT, RSI_DEFAULT},
    error::CondensaError,
    materials::MaterialsDB,
    psicrom,
    types::{Climate, Layer, ThermalProps},
    vecops::{cumsum, vecsum},
};

/// Resistencia térmica de una capa [m2.K/W]
///
/// Para materiales de tipo PROPERTIES es e / lambda. Para los de tipo RESISTANCE es la
/// resistencia del material, con independencia del espesor.
pub fn layer_resistance(layer: &Layer, db: &MaterialsDB) -> Result<f64, CondensaError> {
    match db.get(&layer.material)?.props {
        ThermalProps::Conductivity(k) => Ok(layer.thickness / k),
        ThermalProps::Resistance(r) => Ok(r),
    }
}

/// Espesor de aire equivalente de una capa, S = e * mu [m]
pub fn layer_equivalent_air_thickness(
    layer: &Layer,
    db: &MaterialsDB,
) -> Result<f64, CondensaError> {
    Ok(layer.thickness * db.vapour_diffusivity_factor(&layer.material)?)
}

/// Datos de definición de un cerramiento, tal como se leen de un archivo
#[derive(Debug, Clone, Deserialize)]
struct EnvelopeDef {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: String,
    layers: Vec<Layer>,
    #[serde(default = "default_rse")]
    rse: f64,
    #[serde(default = "default_rsi")]
    rsi: f64,
}

fn default_rse() -> f64 {
    RSE_DEFAULT
}

fn default_rsi() -> f64 {
    RSI_DEFAULT
}

/// Cerramiento multicapa
///
/// Multi-layer building envelope (wall or roof cross-section), layers ordered from exterior to
/// interior, plus exterior (Rse) and interior (Rsi) surface resistances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EnvelopeDef")]
pub struct Envelope {
    /// Nombre
    pub name: String,
    /// Descripción
    pub description: String,
    /// Categoría (p.e. "Fachadas", "Cubiertas")
    pub category: String,
    layers: Vec<Layer>,
    rse: f64,
    rsi: f64,
}

impl TryFrom<EnvelopeDef> for Envelope {
    type Error = CondensaError;

    fn try_from(def: EnvelopeDef) -> Result<Self, Self::Error> {
        let mut envelope = Envelope::new(&def.name, &def.description, def.layers)?
            .with_surface_resistances(def.rse, def.rsi)?;
        envelope.category = def.category;
        Ok(envelope)
    }
}

fn check_surface_resistance(value: f64, what: &str) -> Result<(), CondensaError> {
    if !(value >= 0.0 && value.is_finite()) {
        return Err(CondensaError::InvalidArgument(format!(
            "resistencia superficial {} negativa o no finita ({})",
            what, value
        )));
    }
    Ok(())
}

impl Envelope {
    /// Nuevo cerramiento con las resistencias superficiales por defecto (Rse = 0.04, Rsi = 0.13)
    pub fn new(name: &str, description: &str, layers: Vec<Layer>) -> Result<Self, CondensaError> {
        if layers.is_empty() {
            return Err(CondensaError::InvalidArgument(format!(
                "cerramiento \"{}\" sin capas",
                name
            )));
        }
        for layer in &layers {
            layer.validate()?;
        }
        Ok(Self {
            name: name.to_string(),
            description: description.to_string(),
            category: String::new(),
            layers,
            rse: RSE_DEFAULT,
            rsi: RSI_DEFAULT,
        })
    }

    /// Fija las resistencias superficiales exterior e interior [m2.K/W]
    pub fn with_surface_resistances(mut self, rse: f64, rsi: f64) -> Result<Self, CondensaError> {
        self.set_surface_resistances(rse, rsi)?;
        Ok(self)
    }

    /// Cambia las resistencias superficiales exterior e interior [m2.K/W]
    pub fn set_surface_resistances(&mut self, rse: f64, rsi: f64) -> Result<(), CondensaError> {
        check_surface_resistance(rse, "exterior")?;
        check_surface_resistance(rsi, "interior")?;
        self.rse = rse;
        self.rsi = rsi;
        Ok(())
    }

    /// Capas, de exterior a interior
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Resistencia superficial exterior [m2.K/W]
    pub fn rse(&self) -> f64 {
        self.rse
    }

    /// Resistencia superficial interior [m2.K/W]
    pub fn rsi(&self) -> f64 {
        self.rsi
    }

    fn check_index(&self, index: usize, len: usize) -> Result<(), CondensaError> {
        if index >= len {
            return Err(CondensaError::InvalidArgument(format!(
                "índice de capa {} fuera de rango en \"{}\" ({} capas)",
                index,
                self.name,
                self.layers.len()
            )));
        }
        Ok(())
    }

    // Operaciones sobre capas ------------------------------------------------------------------

    /// Inserta una capa en la posición index (index == número de capas la añade al final)
    pub fn insert_layer(&mut self, index: usize, layer: Layer) -> Result<(), CondensaError> {
        self.check_index(index, self.layers.len() + 1)?;
        layer.validate()?;
        self.layers.insert(index, layer);
        Ok(())
    }

    /// Elimina la capa en la posición index y la devuelve. No puede eliminarse la última capa
    pub fn remove_layer(&mut self, index: usize) -> Result<Layer, CondensaError> {
        self.check_index(index, self.layers.len())?;
        if self.layers.len() == 1 {
            return Err(CondensaError::InvalidArgument(format!(
                "no se puede eliminar la única capa de \"{}\"",
                self.name
            )));
        }
        Ok(self.layers.remove(index))
    }

    /// Intercambia las capas de las posiciones i y j
    pub fn swap_layers(&mut self, i: usize, j: usize) -> Result<(), CondensaError> {
        self.check_index(i, self.layers.len())?;
        self.check_index(j, self.layers.len())?;
        self.layers.swap(i, j);
        Ok(())
    }

    /// Sustituye la capa de la posición index y devuelve la anterior
    pub fn replace_layer(&mut self, index: usize, layer: Layer) -> Result<Layer, CondensaError> {
        self.check_index(index, self.layers.len())?;
        layer.validate()?;
        Ok(std::mem::replace(&mut self.layers[index], layer))
    }

    // Propiedades térmicas ---------------------------------------------------------------------

    /// Resistencias térmicas [m2.K/W]: [Rse, R_capa_1, ..., R_capa_n, Rsi]
    pub fn resistances(&self, db: &MaterialsDB) -> Result<Vec<f64>, CondensaError> {
        let mut res = Vec::with_capacity(self.layers.len() + 2);
        res.push(self.rse);
        for layer in &self.layers {
            res.push(layer_resistance(layer, db)?);
        }
        res.push(self.rsi);
        Ok(res)
    }

    /// Resistencia térmica total, R_total [m2.K/W]
    pub fn total_resistance(&self, db: &MaterialsDB) -> Result<f64, CondensaError> {
        Ok(vecsum(&self.resistances(db)?))
    }

    /// Transmitancia térmica, U = 1 / R_total [W/(m2.K)]
    pub fn transmittance(&self, db: &MaterialsDB) -> Result<f64, CondensaError> {
        let r_total = self.total_resistance(db)?;
        if r_total == 0.0 {
            return Err(CondensaError::DivisionByZero("la transmitancia térmica"));
        }
        Ok(1.0 / r_total)
    }

    // Propiedades de difusión de vapor ---------------------------------------------------------

    /// Espesores de aire equivalentes de las capas, S [m]. Las superficies no aportan
    pub fn equivalent_air_thicknesses(&self, db: &MaterialsDB) -> Result<Vec<f64>, CondensaError> {
        self.layers
            .iter()
            .map(|layer| layer_equivalent_air_thickness(layer, db))
            .collect()
    }

    /// Espesor de aire equivalente total, S_total [m]
    pub fn total_equivalent_air_thickness(&self, db: &MaterialsDB) -> Result<f64, CondensaError> {
        Ok(vecsum(&self.equivalent_air_thicknesses(db)?))
    }

    /// Espesor de aire equivalente acumulado en cada interfase, desde la superficie exterior
    /// (0.0) hasta la interior (S_total). Longitud: número de capas + 1
    pub fn interface_positions(&self, db: &MaterialsDB) -> Result<Vec<f64>, CondensaError> {
        Ok(cumsum(0.0, &self.equivalent_air_thicknesses(db)?))
    }

    // Perfiles ---------------------------------------------------------------------------------

    /// Temperaturas [ºC]: [T_ext, T_sup_ext, T_interfase_1, ..., T_sup_int, T_int]
    ///
    /// Longitud: número de capas + 3
    pub fn temperatures(
        &self,
        db: &MaterialsDB,
        t_ext: f64,
        t_int: f64,
    ) -> Result<Vec<f64>, CondensaError> {
        let resistances = self.resistances(db)?;
        let r_total = vecsum(&resistances);
        if r_total == 0.0 {
            return Err(CondensaError::DivisionByZero("el perfil de temperaturas"));
        }
        let increments: Vec<f64> = resistances
            .iter()
            .map(|r| r * (t_int - t_ext) / r_total)
            .collect();
        let mut temps = cumsum(t_ext, &increments);
        // Cierre exacto en la temperatura interior
        if let Some(last) = temps.last_mut() {
            *last = t_int;
        }
        Ok(temps)
    }

    /// Presiones de vapor [Pa]: [p_ext, p_sup_ext, p_interfase_1, ..., p_sup_int, p_int]
    ///
    /// El aire y la superficie comparten presión a ambos lados. Longitud: número de capas + 3
    pub fn vapour_pressures(
        &self,
        db: &MaterialsDB,
        ext: &Climate,
        int: &Climate,
    ) -> Result<Vec<f64>, CondensaError> {
        let p_ext = ext.vapour_pressure()?;
        let p_int = int.vapour_pressure()?;
        let thicknesses = self.equivalent_air_thicknesses(db)?;
        let s_total = vecsum(&thicknesses);
        if s_total == 0.0 {
            return Err(CondensaError::DivisionByZero(
                "el perfil de presiones de vapor",
            ));
        }
        let increments: Vec<f64> = thicknesses
            .iter()
            .map(|s| s * (p_int - p_ext) / s_total)
            .collect();
        let mut pressures = Vec::with_capacity(self.layers.len() + 3);
        pressures.push(p_ext);
        pressures.extend(cumsum(p_ext, &increments));
        pressures.push(p_int);
        Ok(pressures)
    }

    /// Presiones de saturación [Pa] correspondientes al perfil de temperaturas
    pub fn saturation_pressures(
        &self,
        db: &MaterialsDB,
        t_ext: f64,
        t_int: f64,
    ) -> Result<Vec<f64>, CondensaError> {
        Ok(self
            .temperatures(db, t_ext, t_int)?
            .into_iter()
            .map(psicrom::saturation_pressure)
            .collect())
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.description)?;
        writeln!(f, "Rse = {:.2}, Rsi = {:.2}", self.rse, self.rsi)?;
        for layer in &self.layers {
            writeln!(f, "  {}", layer)?;
        }
        Ok(())
    }
}
