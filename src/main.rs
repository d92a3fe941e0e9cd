use clap::{Arg, Command};
use phrase_i18n::{Replacements, Translator, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("phrase-i18n")
        .version("0.1.0")
        .about("Translate a phrase using a translation resource file")
        .arg(
            Arg::new("resource")
                .help("Path to the translation file (.json, .properties or .ini)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("phrase")
                .help("Source phrase to translate")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("values")
                .help("Replacement values, in placeholder order")
                .num_args(0..)
                .index(3),
        )
        .get_matches();

    let resource = matches.get_one::<String>("resource").unwrap();
    let phrase = matches.get_one::<String>("phrase").unwrap();

    let translator = Translator::new(resource)?;

    let mut replacements = Replacements::new();
    if let Some(values) = matches.get_many::<String>("values") {
        for (index, value) in values.enumerate() {
            // whole numbers take part in pluralisation
            let value = match value.parse::<i64>() {
                Ok(count) => Value::Int(count),
                Err(_) => Value::Text(value.clone()),
            };
            replacements.with_value(&index.to_string(), value);
        }
    }

    println!("{}", translator.translate_with(phrase, &replacements));
    Ok(())
}
