#[test]
fn muro_ejemplo_invierno() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-e",
            "5",
            "96",
        ])
        .stdout()
        .contains("Catálogo de materiales: \"test_data/materiales.csv\" (7 materiales)")
        .stdout()
        .contains("Condiciones interiores (higrometría 3): T = 20.0 ºC, HR = 55 %")
        .stdout()
        .contains("** Cerramiento: Muro ejemplo")
        .stdout()
        .contains("R_total [m2K/W]: 1.244")
        .stdout()
        .contains("U [W/m2K]: 0.804")
        .stdout()
        .contains("S_total [m]: 2.160")
        .stdout()
        .contains("fRsi = 0.799, fRsi,min = 0.606")
        .stdout()
        .contains("Condensaciones superficiales: NO")
        .stdout()
        .contains("Cantidad por plano [g/m2.mes]: 15.86, 15.53")
        .stdout()
        .contains("Cantidad total [g/m2.mes]: 31.40")
        .stdout()
        .contains("Condensaciones intersticiales: SÍ")
        .unwrap();
}

#[test]
fn muro_ejemplo_clima_suave() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-n",
            "Muro ejemplo",
            "-e",
            "10.7",
            "79",
            "-i",
            "20",
            "55",
        ])
        .stdout()
        .contains("Condiciones interiores (usuario): T = 20.0 ºC, HR = 55 %")
        .stdout()
        .contains("Cantidad por plano [g/m2.mes]: -")
        .stdout()
        .contains("Cantidad total [g/m2.mes]: 0.00")
        .stdout()
        .contains("Condensaciones intersticiales: NO")
        .unwrap();
}

#[test]
fn muro_ejemplo_evaporacion() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-e",
            "5",
            "96",
            "--evaporacion",
            "2",
        ])
        .stdout()
        .contains("** Evaporación (interfases 2)")
        .stdout()
        .contains("Cantidad total [g/m2.mes]: 30.08")
        .unwrap();
}

#[test]
fn muro_con_camara_condensaciones_superficiales() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-n",
            "Muro con cámara",
            "-e",
            "5",
            "96",
            "-g",
            "3",
        ])
        .stdout()
        .contains("U [W/m2K]: 1.695")
        .stdout()
        .contains("fRsi = 0.576, fRsi,min = 0.606")
        .stdout()
        .contains("Condensaciones superficiales: SÍ")
        .stdout()
        .contains("Condensaciones intersticiales: NO")
        .unwrap();
}

#[test]
fn higrometria_fuera_de_rango() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-e",
            "5",
            "96",
            "-g",
            "7",
        ])
        .fails()
        .and()
        .stderr()
        .contains("Clase de higrometría 7 fuera de rango (1 a 5)")
        .unwrap();
}

#[test]
fn material_desconocido() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-n",
            "Muro con material desconocido",
            "-e",
            "5",
            "96",
        ])
        .fails()
        .and()
        .stderr()
        .contains("Material \"Hormigón celular\" no encontrado")
        .unwrap();
}

#[test]
fn cerramiento_inexistente() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-n",
            "Cubierta",
            "-e",
            "5",
            "96",
        ])
        .fails()
        .and()
        .stderr()
        .contains("No se ha encontrado el cerramiento \"Cubierta\"")
        .unwrap();
}

#[test]
fn interior_bajo_cero() {
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-e",
            "30",
            "80",
            "-i",
            "-5",
            "80",
        ])
        .stdout()
        .contains("Condiciones interiores (usuario): T = -5.0 ºC, HR = 80 %")
        .stdout()
        .contains("Cantidad total [g/m2.mes]: 302.60")
        .stdout()
        .contains("Condensaciones intersticiales: SÍ")
        .unwrap();
}

#[test]
fn evaporacion_en_salida_json() {
    let path = std::env::temp_dir().join("condensa_test_evaporacion.json");
    let _ = std::fs::remove_file(&path);
    assert_cli::Assert::main_binary()
        .with_args(&[
            "-m",
            "test_data/materiales.csv",
            "-c",
            "test_data/cerramientos.json",
            "-e",
            "5",
            "96",
            "--json",
            path.to_str().unwrap(),
            "--evaporacion",
            "2",
        ])
        .stdout()
        .contains("Cantidad total [g/m2.mes]: 30.08")
        .unwrap();
    let json = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(report["evaporation"]["indices"], serde_json::json!([0, 2, 5]));
    assert_eq!(report["condensation"]["indices"], serde_json::json!([0, 1, 2, 5]));
    let _ = std::fs::remove_file(&path);
}
