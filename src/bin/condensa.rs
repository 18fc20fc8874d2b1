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

#[macro_use]
extern crate clap;

use std::convert::TryFrom;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::process::exit;
use std::str::FromStr;

use clap::{App, AppSettings, Arg};
use failure::Error;
use failure::ResultExt;

use condensaciones::{
    cte::{self, HygrometryClass},
    types::Climate,
    AsCtePlain, Envelope, MaterialsDB,
};

// Funciones auxiliares -----------------------------------------------------------------------

fn readfile(path: &Path) -> Result<String, Error> {
    let mut f = File::open(path).context(format!("Archivo {} no encontrado", path.display()))?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .context("Error al leer el archivo")?;
    Ok(contents)
}

fn writefile(path: &Path, content: &[u8]) {
    let res = File::create(&path).and_then(|mut file| file.write_all(content));
    if let Err(err) = res {
        eprintln!(
            "ERROR: no se ha podido escribir en \"{}\": {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    }
}

/// Condiciones climáticas a partir de los valores (T, HR) de la CLI
fn climate_from_args(values: Option<clap::Values<'_>>, descr: &str) -> Option<Climate> {
    values.map(|v| {
        let vv = v
            .map(|vv| f64::from_str(vv.trim()))
            .collect::<Result<Vec<f64>, _>>()
            .unwrap_or_else(|_| {
                eprintln!(
                    "ERROR: Las condiciones {} (T, HR) no son valores numéricos válidos",
                    descr
                );
                exit(exitcode::DATAERR);
            });
        Climate::new(vv[0], vv[1]).unwrap_or_else(|error| {
            eprintln!("ERROR: Condiciones {} incorrectas ({})", descr, error);
            exit(exitcode::DATAERR);
        })
    })
}

/// Carga el catálogo de materiales
fn get_materials(archivo: &str) -> MaterialsDB {
    let path = Path::new(archivo);
    let dbstring = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: No se ha podido leer el catálogo de materiales \"{}\" -> {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    });
    match dbstring.parse::<MaterialsDB>() {
        Ok(db) => {
            println!(
                "Catálogo de materiales: \"{}\" ({} materiales)",
                path.display(),
                db.len()
            );
            db
        }
        Err(err) => {
            eprintln!(
                "ERROR: Formato incorrecto del catálogo de materiales \"{}\" ({})",
                path.display(),
                err
            );
            exit(exitcode::DATAERR);
        }
    }
}

/// Carga el cerramiento de nombre `nombre` o el primero del archivo de cerramientos
fn get_envelope(archivo: &str, nombre: Option<&str>) -> Envelope {
    let path = Path::new(archivo);
    let envstring = readfile(path).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: No se ha podido leer el archivo de cerramientos \"{}\" -> {}",
            path.display(),
            err
        );
        exit(exitcode::IOERR);
    });
    let envelopes: Vec<Envelope> = serde_json::from_str(&envstring).unwrap_or_else(|err| {
        eprintln!(
            "ERROR: Formato incorrecto del archivo de cerramientos \"{}\" ({})",
            path.display(),
            err
        );
        exit(exitcode::DATAERR);
    });
    println!("Cerramientos: \"{}\"", path.display());
    let envelope = match nombre {
        Some(nombre) => envelopes.into_iter().find(|e| e.name == nombre),
        None => envelopes.into_iter().next(),
    };
    envelope.unwrap_or_else(|| {
        eprintln!(
            "ERROR: No se ha encontrado el cerramiento \"{}\"",
            nombre.unwrap_or("")
        );
        exit(exitcode::DATAERR);
    })
}

/// Condiciones interiores
/// Argumentos de CLI (T, HR) > Clase de higrometría (T = 20ºC)
fn get_interior(matches: &clap::ArgMatches<'_>) -> Climate {
    if let Some(int) = climate_from_args(matches.values_of("interior"), "interiores") {
        println!("Condiciones interiores (usuario): {}", int);
        return int;
    }
    let hygrometry = if matches.is_present("higrometria") {
        let class = value_t!(matches, "higrometria", u8).unwrap_or_else(|_| {
            eprintln!("ERROR: La clase de higrometría no es un valor numérico válido");
            exit(exitcode::DATAERR);
        });
        HygrometryClass::try_from(class).unwrap_or_else(|error| {
            eprintln!("ERROR: {}", error);
            exit(exitcode::DATAERR);
        })
    } else {
        HygrometryClass::default()
    };
    let int = Climate::new(cte::TINT_DEFAULT, hygrometry.hr_interior()).unwrap_or_else(|error| {
        eprintln!("ERROR: Condiciones interiores incorrectas ({})", error);
        exit(exitcode::DATAERR);
    });
    println!(
        "Condiciones interiores (higrometría {}): {}",
        hygrometry, int
    );
    int
}

// Función principal ------------------------------------------------------------------------------

fn main() {
    let matches = App::new("Condensa")
        .bin_name("condensa")
        .version(env!("CARGO_PKG_VERSION"))
        .author("
Copyright (c) 2018-2022 Ministerio de Fomento,
                        Instituto de CC. de la Construcción Eduardo Torroja (IETcc-CSIC)

Autores: Rafael Villar Burke <pachi@ietcc.csic.es>,
         Daniel Jiménez González <dani@ietcc.csic.es>

Licencia: Publicado bajo licencia MIT.

")
        .about("Condensa - Condensaciones superficiales e intersticiales en cerramientos (UNE-EN ISO 13788, CTE DB-HE).")
        .setting(AppSettings::NextLineHelp)
        .arg(Arg::with_name("archivo_materiales")
            .short("m")
            .long("materiales")
            .value_name("ARCHIVO_MATERIALES")
            .required_unless("showlicense")
            .help("Archivo del catálogo de materiales")
            .takes_value(true)
            .display_order(1))
        .arg(Arg::with_name("archivo_cerramientos")
            .short("c")
            .long("cerramientos")
            .value_name("ARCHIVO_CERRAMIENTOS")
            .required_unless("showlicense")
            .help("Archivo de definición de cerramientos (JSON)")
            .takes_value(true)
            .display_order(2))
        .arg(Arg::with_name("nombre")
            .short("n")
            .long("nombre")
            .value_name("NOMBRE")
            .help("Nombre del cerramiento a calcular (por defecto, el primero del archivo)")
            .takes_value(true)
            .display_order(3))
        .arg(Arg::with_name("exterior")
            .short("e")
            .long("exterior")
            .value_names(&["T_ext", "HR_ext"])
            .required_unless("showlicense")
            .help("Condiciones exteriores: temperatura [ºC] y humedad relativa [%].\nP.e.: -e 5 96")
            .takes_value(true)
            .number_of_values(2)
            .allow_hyphen_values(true)
            .display_order(4))
        .arg(Arg::with_name("interior")
            .short("i")
            .long("interior")
            .value_names(&["T_int", "HR_int"])
            .conflicts_with("higrometria")
            .help("Condiciones interiores: temperatura [ºC] y humedad relativa [%].\nP.e.: -i 20 55, -i -5 80")
            .takes_value(true)
            .number_of_values(2)
            .allow_hyphen_values(true)
            .display_order(5))
        .arg(Arg::with_name("higrometria")
            .short("g")
            .long("higrometria")
            .value_name("CLASE")
            .help("Clase de higrometría del espacio interior (1 a 5), con T_int = 20ºC.\nPor defecto, clase 3")
            .takes_value(true)
            .display_order(6))
        .arg(Arg::with_name("evaporacion")
            .long("evaporacion")
            .value_name("INTERFASES")
            .help("Calcula la evaporación en las interfases indicadas.\nP.e.: --evaporacion 2")
            .takes_value(true)
            .multiple(true))
        .arg(Arg::with_name("archivo_salida_json")
            .long("json")
            .value_name("ARCHIVO_SALIDA_JSON")
            .help("Archivo de salida de resultados detallados en formato JSON")
            .takes_value(true))
        .arg(Arg::with_name("showlicense")
            .short("L")
            .long("licencia")
            .help("Muestra la licencia del programa (MIT)"))
        .arg(Arg::with_name("v")
            .short("v")
            .multiple(true)
            .help("Sets the level of verbosity"))
        .get_matches();

    if matches.is_present("showlicense") {
        println!(
            "
Copyright (c) 2018-2022 Ministerio de Fomento
                        Instituto de Ciencias de la Construcción Eduardo Torroja (IETcc-CSIC)

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the 'Software'), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED 'AS IS', WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.

Author(s): Rafael Villar Burke <pachi@ietcc.csic.es>
           Daniel Jiménez González <dani@ietcc.csic.es>"
        );
        exit(exitcode::OK);
    }

    // Prólogo ------------------------------------------------------------------------------------

    let verbosity = matches.occurrences_of("v");

    if verbosity > 2 {
        println!("Opciones indicadas: ----------");
        println!("{:#?}", matches);
        println!("------------------------------");
    }

    println!("** Datos de entrada");

    // Materiales y cerramiento -------------------------------------------------------------------
    let db = get_materials(matches.value_of("archivo_materiales").unwrap());
    let envelope = get_envelope(
        matches.value_of("archivo_cerramientos").unwrap(),
        matches.value_of("nombre"),
    );

    if verbosity > 1 {
        println!("Cerramiento:\n{}", envelope);
    }

    // Condiciones de cálculo ---------------------------------------------------------------------
    let ext = climate_from_args(matches.values_of("exterior"), "exteriores").unwrap_or_else(|| {
        eprintln!("ERROR: Sin datos suficientes para determinar las condiciones exteriores");
        exit(exitcode::USAGE);
    });
    println!("Condiciones exteriores (usuario): {}", ext);
    let int = get_interior(&matches);

    // Interfases de evaporación ------------------------------------------------------------------
    let interfaces = matches.values_of("evaporacion").map(|values| {
        values
            .map(|v| usize::from_str(v.trim()))
            .collect::<Result<Vec<usize>, _>>()
            .unwrap_or_else(|_| {
                eprintln!("ERROR: Las interfases de evaporación deben ser números enteros");
                exit(exitcode::DATAERR);
            })
    });

    // Cálculo de condensaciones y evaporaciones --------------------------------------------------
    let report = match interfaces {
        Some(ref interfaces) => {
            cte::check_envelope_evaporation(&envelope, &db, &ext, &int, interfaces)
        }
        None => cte::check_envelope(&envelope, &db, &ext, &int),
    }
    .unwrap_or_else(|error| {
        eprintln!("ERROR: No se han podido calcular las condensaciones");
        eprintln!("{}", error);
        exit(exitcode::DATAERR);
    });

    // Salida de resultados ------------------------------------------------------------------------
    if matches.is_present("archivo_salida_json") {
        let path = Path::new(matches.value_of_os("archivo_salida_json").unwrap());
        if verbosity > 0 {
            println!("Resultados en formato JSON: {:?}", path.display());
        }
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            eprintln!("ERROR: No se han podido convertir los resultados al formato JSON");
            if verbosity > 2 {
                println!("{}", error)
            };
            exit(exitcode::DATAERR);
        });
        writefile(&path, json.as_bytes());
    }

    // Mostrar siempre en formato plain
    println!("\n{}", report.to_plain());
}
