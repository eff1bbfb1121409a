#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;


macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}
		)*
	};
}

pub(crate) use strenum;

macro_rules! getter {
	($name:ident -> ids) => {
		$crate::macros::getter! { $name::$name -> ids }
	};

	($name:ident::$rename:ident -> ids) => {
		paste::paste! {
			pub fn $name(&self) -> Vec<String> {
				self.ids(stringify!($rename))
			}

			pub fn [< fetch_$name >](&self) -> (Vec<String>, Option<$crate::Error>) {
				self.fetch_ids(stringify!($rename))
			}
		}
	};

	($name:ident -> list) => {
		$crate::macros::getter! { $name::$name -> list }
	};

	($name:ident::$rename:ident -> list) => {
		paste::paste! {
			pub fn $name(&self) -> Vec<$crate::Object> {
				self.list(stringify!($rename))
			}

			pub fn [< fetch_$name >](&self) -> (Vec<$crate::Object>, Option<$crate::Error>) {
				self.fetch_list(stringify!($rename))
			}
		}
	};

	($name:ident -> lang) => {
		paste::paste! {
			pub fn $name(&self, lang: &str) -> String {
				self.lang_str(stringify!($name), lang)
			}

			pub fn [< fetch_$name >](&self, lang: &str) -> (String, Option<$crate::Error>) {
				self.fetch_lang(stringify!($name), lang)
			}
		}
	};
}

pub(crate) use getter;
