use crate::domain::card::{CardId, CustomCard};
use crate::domain::query::SortKey;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Club,
    Type,
    Position,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Preview(String),
    Filter(FilterField, String),
    Clear,
    Sort(SortKey),
    Options,
    Add(CardId),
    /// One-based cart position, as printed by `cart`.
    Remove(usize),
    Cart,
    Checkout,
    Collect(CardId),
    Collection,
    ForSale,
    Create(CustomCard),
    Sell(CustomCard),
    Stats,
    Reload,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{0}` needs {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("{0}")]
    Invalid(String),
}

fn required(
    command: &'static str,
    rest: &str,
    what: &'static str,
) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command, what))
    } else {
        Ok(rest.to_string())
    }
}

fn parse_filter(rest: &str) -> Result<Command, ParseError> {
    let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
    let field = match field.to_lowercase().as_str() {
        "club" | "team" => FilterField::Club,
        "type" => FilterField::Type,
        "position" | "pos" => FilterField::Position,
        "" => return Err(ParseError::MissingArgument("filter", "club, type or position")),
        other => {
            return Err(ParseError::Invalid(format!(
                "Cannot filter on `{other}`, use club, type or position"
            )))
        }
    };

    Ok(Command::Filter(field, value.trim().to_string()))
}

fn parse_position(rest: &str) -> Result<usize, ParseError> {
    let rest = required("remove", rest, "a cart position")?;
    match rest.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(ParseError::Invalid(format!(
            "`{rest}` is not a cart position"
        ))),
    }
}

/// `name[;club;type;position;price]`, blank fields take the card defaults.
fn parse_custom(command: &'static str, rest: &str) -> Result<CustomCard, ParseError> {
    let mut fields = rest.split(';').map(str::trim);
    let name = fields.next().unwrap_or_default();
    if name.is_empty() {
        return Err(ParseError::MissingArgument(command, "a card name"));
    }

    let mut text = || fields.next().filter(|field| !field.is_empty()).map(String::from);
    let club = text();
    let card_type = text();
    let position = text();
    let price = match text() {
        None => None,
        Some(price) => Some(
            price
                .replace(',', ".")
                .parse::<f64>()
                .map_err(|_| ParseError::Invalid(format!("`{price}` is not a price")))?,
        ),
    };

    Ok(CustomCard {
        name: name.to_string(),
        club,
        card_type,
        position,
        price,
        ..CustomCard::default()
    })
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word.to_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "search" => Command::Search(rest.to_string()),
        "preview" => Command::Preview(rest.to_string()),
        "filter" => parse_filter(rest)?,
        "clear" => Command::Clear,
        "sort" => {
            let key = required("sort", rest, "name, price-asc, price-desc or rarity")?;
            Command::Sort(
                key.parse::<SortKey>()
                    .map_err(|why| ParseError::Invalid(why.to_string()))?,
            )
        }
        "options" => Command::Options,
        "add" => Command::Add(CardId::from(required("add", rest, "a card id")?.as_str())),
        "remove" | "rm" => Command::Remove(parse_position(rest)?),
        "cart" => Command::Cart,
        "checkout" => Command::Checkout,
        "collect" => Command::Collect(CardId::from(
            required("collect", rest, "a card id")?.as_str(),
        )),
        "collection" => Command::Collection,
        "forsale" => Command::ForSale,
        "create" => Command::Create(parse_custom("create", rest)?),
        "sell" => Command::Sell(parse_custom("sell", rest)?),
        "stats" => Command::Stats,
        "reload" => Command::Reload,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_commands() {
        assert_eq!(parse("list"), Ok(Command::List));
        assert_eq!(parse("  CART "), Ok(Command::Cart));
        assert_eq!(parse("exit"), Ok(Command::Quit));
        assert_eq!(parse("forsale"), Ok(Command::ForSale));
    }

    #[test]
    fn test_search_keeps_inner_spaces() {
        assert_eq!(
            parse("search  paris saint "),
            Ok(Command::Search(String::from("paris saint")))
        );
        assert_eq!(parse("search"), Ok(Command::Search(String::new())));
    }

    #[test]
    fn test_filter_aliases() {
        assert_eq!(
            parse("filter team PSG"),
            Ok(Command::Filter(FilterField::Club, String::from("PSG")))
        );
        assert_eq!(
            parse("filter pos Milieu défensif"),
            Ok(Command::Filter(
                FilterField::Position,
                String::from("Milieu défensif")
            ))
        );
        assert_eq!(
            parse("filter type"),
            Ok(Command::Filter(FilterField::Type, String::new()))
        );
    }

    #[test]
    fn test_filter_unknown_field() {
        assert!(matches!(parse("filter colour red"), Err(ParseError::Invalid(_))));
        assert_eq!(
            parse("filter"),
            Err(ParseError::MissingArgument("filter", "club, type or position"))
        );
    }

    #[test]
    fn test_sort_keys() {
        assert_eq!(parse("sort price-high"), Ok(Command::Sort(SortKey::PriceDesc)));
        assert_eq!(parse("sort rarity"), Ok(Command::Sort(SortKey::Rarity)));
        assert!(matches!(parse("sort age"), Err(ParseError::Invalid(_))));
        assert!(matches!(parse("sort"), Err(ParseError::MissingArgument("sort", _))));
    }

    #[test]
    fn test_ids() {
        assert_eq!(parse("add 12"), Ok(Command::Add(CardId::from(12))));
        assert_eq!(
            parse("collect OM-1"),
            Ok(Command::Collect(CardId::from("OM-1")))
        );
        assert!(matches!(parse("add"), Err(ParseError::MissingArgument("add", _))));
    }

    #[test]
    fn test_remove_is_one_based() {
        assert_eq!(parse("remove 1"), Ok(Command::Remove(1)));
        assert!(matches!(parse("remove 0"), Err(ParseError::Invalid(_))));
        assert!(matches!(parse("remove first"), Err(ParseError::Invalid(_))));
    }

    #[test]
    fn test_create_with_all_fields() {
        let Ok(Command::Create(card)) = parse("create Mon Joueur; PSG ;Rare;Milieu;4,5") else {
            panic!("expected a create command");
        };

        assert_eq!(card.name, "Mon Joueur");
        assert_eq!(card.club.as_deref(), Some("PSG"));
        assert_eq!(card.card_type.as_deref(), Some("Rare"));
        assert_eq!(card.position.as_deref(), Some("Milieu"));
        assert_eq!(card.price, Some(4.5));
    }

    #[test]
    fn test_sell_with_blank_fields() {
        assert_eq!(
            parse("sell Vente;;;;"),
            Ok(Command::Sell(CustomCard::named("Vente")))
        );
    }

    #[test]
    fn test_create_errors() {
        assert_eq!(
            parse("create ;PSG"),
            Err(ParseError::MissingArgument("create", "a card name"))
        );
        assert!(matches!(
            parse("sell Vente;;;;cheap"),
            Err(ParseError::Invalid(_))
        ));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("buy 3").unwrap_err().to_string(),
            "Unknown command `buy`, try `help`"
        );
    }
}
