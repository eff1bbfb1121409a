use crate::{getter, Object};

impl Object {
	getter! { attachments::attachment -> list }
	getter! { icons::icon -> list }
	getter! { images::image -> list }
	getter! { tags::tag -> list }
	getter! { urls::url -> list }

	getter! { attributed_to::attributedTo -> ids }
	getter! { audience -> ids }
	getter! { bcc -> ids }
	getter! { bto -> ids }
	getter! { cc -> ids }
	getter! { to -> ids }
}
