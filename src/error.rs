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
Errores
=======

Tipos de error de la biblioteca.

Todos los errores son fallos de precondición sobre los datos de entrada (catálogos o
cerramientos mal definidos) y se devuelven inmediatamente al llamante.
*/

use std::fmt;

/// Error en la definición de los datos o en el cálculo de condensaciones
#[derive(Debug, Clone, PartialEq)]
pub enum CondensaError {
    /// Material desconocido en el catálogo
    NotFound(String),
    /// Propiedad solicitada no disponible para el tipo de material
    TypeMismatch {
        /// Nombre del material
        name: String,
        /// Tipo de material necesario para la propiedad solicitada
        expected: &'static str,
    },
    /// Argumento fuera de rango o dato mal definido
    InvalidArgument(String),
    /// División por cero al evaluar la magnitud indicada
    DivisionByZero(&'static str),
    /// Clase de higrometría fuera del rango 1 a 5
    HygrometryOutOfRange(u8),
    /// Error al interpretar datos en formato texto
    ParseError(String),
}

impl fmt::Display for CondensaError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use CondensaError::*;
        match self {
            NotFound(name) => write!(f, "Material \"{}\" no encontrado", name),
            TypeMismatch { name, expected } => write!(
                f,
                "El material \"{}\" no es de tipo {}",
                name, expected
            ),
            InvalidArgument(desc) => write!(f, "Argumento no válido: {}", desc),
            DivisionByZero(what) => write!(f, "División por cero al calcular {}", what),
            HygrometryOutOfRange(class) => write!(
                f,
                "Clase de higrometría {} fuera de rango (1 a 5)",
                class
            ),
            ParseError(s) => write!(f, "Error al interpretar \"{}\"", s),
        }
    }
}

impl std::error::Error for CondensaError {}

impl From<std::num::ParseFloatError> for CondensaError {
    fn from(err: std::num::ParseFloatError) -> Self {
        CondensaError::ParseError(format!("número: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            CondensaError::NotFound("Ladrillo".into()).to_string(),
            "Material \"Ladrillo\" no encontrado"
        );
        assert_eq!(
            CondensaError::HygrometryOutOfRange(7).to_string(),
            "Clase de higrometría 7 fuera de rango (1 a 5)"
        );
    }

    #[test]
    fn parse_float_conversion() {
        let err: CondensaError = "x1.0".parse::<f64>().unwrap_err().into();
        match err {
            CondensaError::ParseError(_) => (),
            other => panic!("Error inesperado: {:?}", other),
        }
    }
}
