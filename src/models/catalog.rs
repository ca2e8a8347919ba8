use crate::error::CatApiError;
use std::fmt;
use std::str::FromStr;

macro_rules! value_set {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl FromStr for $name {
            type Err = CatApiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(CatApiError::Invalid(format!("{}: '{}' is invalid", $what, s))),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

value_set! {
    /// File formats the image endpoint can filter on.
    ImageType, "type" {
        Png => "png",
        Jpg => "jpg",
        Gif => "gif",
    }
}

value_set! {
    /// small = 250px wide, med = 500px wide, full = original size.
    ImageSize, "size" {
        Small => "small",
        Med => "med",
        Full => "full",
    }
}

value_set! {
    /// Category filters accepted by `images/get`.
    CategoryName, "category" {
        Hats => "hats",
        Space => "space",
        Funny => "funny",
        Sunglasses => "sunglasses",
        Boxes => "boxes",
        Caturday => "caturday",
        Ties => "ties",
        Dream => "dream",
        // accepted upstream but currently returns no images
        Kittens => "kittens",
        Sinks => "sinks",
        Clothes => "clothes",
    }
}

value_set! {
    FavouriteAction, "action" {
        Add => "add",
        Remove => "remove",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("PNG".parse::<ImageType>().unwrap(), ImageType::Png);
        assert_eq!("Med".parse::<ImageSize>().unwrap(), ImageSize::Med);
        assert_eq!("CatUrday".parse::<CategoryName>().unwrap(), CategoryName::Caturday);
        assert_eq!("REMOVE".parse::<FavouriteAction>().unwrap(), FavouriteAction::Remove);
    }

    #[test]
    fn rejects_unknown_values_echoing_input() {
        let err = "Bmp".parse::<ImageType>().unwrap_err();
        assert_eq!(err.to_string(), "type: 'Bmp' is invalid");
        assert!(err.is_validation());
    }

    #[test]
    fn category_set_has_eleven_entries() {
        assert_eq!(CategoryName::ALL.len(), 11);
        assert!(CategoryName::ALL.contains(&CategoryName::Kittens));
    }
}
