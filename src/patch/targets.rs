//! The two generated client shapes this tool knows how to extend
//!
//! Both files declare a sync and an async container client in `module Pinnacle`.
//! Each container only keeps a `request_client`; the patched version also exposes
//! one sub-client per accessor, built from that same request client.

use super::anchor::{LiteralAnchor, WhitespaceTolerantAnchor};
use super::rule::{Rule, Transformation};
use crate::core::error::UpdaterResult;

/// Sub-client exposed on a container
#[derive(Debug, Clone, Copy)]
pub struct Accessor {
  /// Reader name, e.g. `sms`
  pub name: &'static str,
  /// Helper client class without the `Async` prefix, e.g. `SmsClient`
  pub client: &'static str,
}

/// Sync container vs. its `Async*` twin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
  Sync,
  Async,
}

impl Flavor {
  fn prefix(self) -> &'static str {
    match self {
      Flavor::Sync => "",
      Flavor::Async => "Async",
    }
  }
}

/// A generated container client and the accessors it should gain
#[derive(Debug, Clone, Copy)]
pub struct ClientShape {
  /// Container class without the `Async` prefix, e.g. `MessagesClient`
  pub class: &'static str,
  /// Namespace of the helper clients under `Pinnacle`, e.g. `Messages`
  pub namespace: &'static str,
  pub accessors: &'static [Accessor],
}

impl ClientShape {
  pub fn class_name(&self, flavor: Flavor) -> String {
    format!("{}{}", flavor.prefix(), self.class)
  }

  fn helper_type(&self, flavor: Flavor, accessor: &Accessor) -> String {
    format!("Pinnacle::{}::{}{}", self.namespace, flavor.prefix(), accessor.client)
  }

  /// Class header, fields and constructor as generated, or extended with accessors
  ///
  /// The text starts at `class` (no leading indentation) so it can replace a
  /// match that begins at the first token.
  pub fn render_class(&self, flavor: Flavor, with_accessors: bool) -> String {
    let class = self.class_name(flavor);
    let request_client = format!("Pinnacle::{}RequestClient", flavor.prefix());
    let accessors: &[Accessor] = if with_accessors { self.accessors } else { &[] };

    let mut out = format!("class {class}\n");
    out.push_str(&format!("    # @return [{request_client}]\n"));
    out.push_str("    attr_reader :request_client\n");
    for accessor in accessors {
      out.push_str(&format!("    # @return [{}]\n", self.helper_type(flavor, accessor)));
      out.push_str(&format!("    attr_reader :{}\n", accessor.name));
    }
    out.push('\n');
    out.push_str(&format!("    # @param request_client [{request_client}]\n"));
    out.push_str(&format!("    # @return [Pinnacle::{class}]\n"));
    out.push_str("    def initialize(request_client:)\n");
    out.push_str("      @request_client = request_client\n");
    for accessor in accessors {
      out.push_str(&format!(
        "      @{} = {}.new(request_client: request_client)\n",
        accessor.name,
        self.helper_type(flavor, accessor)
      ));
    }
    out.push_str("    end");
    out
  }

  /// Replace rule for one flavor of the container
  ///
  /// The sync class is anchored together with its `module Pinnacle` opener, the
  /// async class on its own, matching where each sits in the generated file.
  pub fn block_rule(&self, flavor: Flavor) -> UpdaterResult<Rule> {
    let opener = match flavor {
      Flavor::Sync => "module Pinnacle\n  ",
      Flavor::Async => "",
    };
    let anchor = format!("{}{}", opener, self.render_class(flavor, false));
    let replacement = format!("{}{}", opener, self.render_class(flavor, true));

    Ok(Rule::Replace {
      anchor: Box::new(WhitespaceTolerantAnchor::new(&anchor)?),
      replacement,
      description: Some(format!(
        "{} (added {} accessors)",
        self.class_name(flavor),
        self.accessor_list()
      )),
    })
  }

  /// Change entry for the `require_relative` insertion
  pub fn require_description(&self) -> String {
    format!("{} requires ({})", self.class, self.accessor_list())
  }

  fn accessor_list(&self) -> String {
    self.accessors.iter().map(|a| a.name).collect::<Vec<_>>().join(", ")
  }

  /// Marker proving the container was already extended
  pub fn marker(&self) -> String {
    let first = self.accessors.first().map(|a| a.name).unwrap_or_default();
    format!("attr_reader :{}", first)
  }

  /// `require_relative` lines for the accessor sub-clients, in accessor order
  pub fn require_lines(&self) -> String {
    self
      .accessors
      .iter()
      .map(|a| format!("require_relative \"{}/client\"\n", a.name))
      .collect()
  }
}

/// Accessors added to `MessagesClient`
pub const MESSAGES: ClientShape = ClientShape {
  class: "MessagesClient",
  namespace: "Messages",
  accessors: &[
    Accessor {
      name: "sms",
      client: "SmsClient",
    },
    Accessor {
      name: "mms",
      client: "MmsClient",
    },
    Accessor {
      name: "rcs",
      client: "RcsClient",
    },
  ],
};

/// Accessors added to `PhoneNumbersClient`
pub const PHONE_NUMBERS: ClientShape = ClientShape {
  class: "PhoneNumbersClient",
  namespace: "PhoneNumbers",
  accessors: &[
    Accessor {
      name: "campaign",
      client: "CampaignClient",
    },
    Accessor {
      name: "webhook",
      client: "WebhookClient",
    },
  ],
};

/// Line after which the sub-client requires go in `messages/client.rb`
const MESSAGES_REQUIRE_ANCHOR: &str = "require_relative \"../types/reaction_result\"\n";

/// Line after which the sub-client requires go in `phone_numbers/client.rb`
const PHONE_NUMBERS_REQUIRE_ANCHOR: &str = "require_relative \"types/phone_numbers_get_response\"\n";

fn transformation(shape: &ClientShape, require_anchor: &str) -> UpdaterResult<Transformation> {
  let guard = shape.require_lines().lines().next().unwrap_or_default().to_string();

  Ok(Transformation {
    marker: shape.marker(),
    rules: vec![
      Rule::Insert {
        guard,
        anchor: Box::new(LiteralAnchor::new(require_anchor)),
        insertion: shape.require_lines(),
        description: Some(shape.require_description()),
      },
      shape.block_rule(Flavor::Sync)?,
      shape.block_rule(Flavor::Async)?,
    ],
  })
}

/// Adds `sms`, `mms`, `rcs` to the messages clients
pub fn messages_client() -> UpdaterResult<Transformation> {
  transformation(&MESSAGES, MESSAGES_REQUIRE_ANCHOR)
}

/// Adds `campaign`, `webhook` to the phone-numbers clients
pub fn phone_numbers_client() -> UpdaterResult<Transformation> {
  transformation(&PHONE_NUMBERS, PHONE_NUMBERS_REQUIRE_ANCHOR)
}
