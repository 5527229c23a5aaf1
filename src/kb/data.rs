//! Built-in HTML tag, attribute and value-set tables.
//!
//! Attribute descriptors use `name:key` notation, where `key` names an entry
//! in the value-set table for attributes with enumerated values.

use std::collections::HashMap;

use super::{AttributeDef, TagDef};

/// Elements that have no end tag.
pub(super) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "menuitem",
    "meta", "param", "source", "track", "wbr",
];

fn attr(descriptor: &str) -> AttributeDef {
    match descriptor.split_once(':') {
        Some((name, key)) => AttributeDef {
            name: name.to_string(),
            value_set: Some(key.to_string()),
        },
        None => AttributeDef {
            name: descriptor.to_string(),
            value_set: None,
        },
    }
}

fn tag(name: &str, documentation: &str, attributes: &[&str]) -> TagDef {
    TagDef {
        name: name.to_string(),
        documentation: documentation.to_string(),
        attributes: attributes.iter().map(|d| attr(d)).collect(),
    }
}

pub(super) fn standard_tags() -> Vec<TagDef> {
    vec![
        // The root element
        tag("html", "The html element represents the root of an HTML document.", &["manifest"]),
        // Document metadata
        tag("head", "The head element represents a collection of metadata for the Document.", &[]),
        tag("title", "The title element represents the document's title or name. Authors should use titles that identify their documents even when they are used out of context, for example in a user's history or bookmarks, or in search results. The document's title is often different from its first heading, since the first heading does not have to stand alone when taken out of context.", &[]),
        tag("base", "The base element allows authors to specify the document base URL for the purposes of resolving relative URLs, and the name of the default browsing context for the purposes of following hyperlinks. The element does not represent any content beyond this information.", &["href", "target"]),
        tag("link", "The link element allows authors to link their document to other resources.", &["href", "crossorigin:xo", "rel", "media", "hreflang", "type", "sizes"]),
        tag("meta", "The meta element represents various kinds of metadata that cannot be expressed using the title, base, link, style, and script elements.", &["name", "http-equiv", "content", "charset"]),
        tag("style", "The style element allows authors to embed style information in their documents. The style element is one of several inputs to the styling processing model. The element does not represent content for the user.", &["media", "nonce", "type", "scoped:v"]),
        // Sections
        tag("body", "The body element represents the content of the document.", &["onafterprint", "onbeforeprint", "onbeforeunload", "onhashchange", "onlanguagechange", "onmessage", "onoffline", "ononline", "onpagehide", "onpageshow", "onpopstate", "onstorage", "onunload"]),
        tag("article", "The article element represents a complete, or self-contained, composition in a document, page, application, or site and that is, in principle, independently distributable or reusable, e.g. in syndication. This could be a forum post, a magazine or newspaper article, a blog entry, a user-submitted comment, an interactive widget or gadget, or any other independent item of content. Each article should be identified, typically by including a heading (h1\u{2013}h6 element) as a child of the article element.", &[]),
        tag("section", "The section element represents a generic section of a document or application. A section, in this context, is a thematic grouping of content. Each section should be identified, typically by including a heading ( h1- h6 element) as a child of the section element.", &[]),
        tag("nav", "The nav element represents a section of a page that links to other pages or to parts within the page: a section with navigation links.", &[]),
        tag("aside", "The aside element represents a section of a page that consists of content that is tangentially related to the content around the aside element, and which could be considered separate from that content. Such sections are often represented as sidebars in printed typography.", &[]),
        tag("h1", "The h1 element represents a section heading.", &[]),
        tag("h2", "The h2 element represents a section heading.", &[]),
        tag("h3", "The h3 element represents a section heading.", &[]),
        tag("h4", "The h4 element represents a section heading.", &[]),
        tag("h5", "The h5 element represents a section heading.", &[]),
        tag("h6", "The h6 element represents a section heading.", &[]),
        tag("header", "The header element represents introductory content for its nearest ancestor sectioning content or sectioning root element. A header typically contains a group of introductory or navigational aids. When the nearest ancestor sectioning content or sectioning root element is the body element, then it applies to the whole page.", &[]),
        tag("footer", "The footer element represents a footer for its nearest ancestor sectioning content or sectioning root element. A footer typically contains information about its section such as who wrote it, links to related documents, copyright data, and the like.", &[]),
        tag("address", "The address element represents the contact information for its nearest article or body element ancestor. If that is the body element, then the contact information applies to the document as a whole.", &[]),
        // Grouping content
        tag("p", "The p element represents a paragraph.", &[]),
        tag("hr", "The hr element represents a paragraph-level thematic break, e.g. a scene change in a story, or a transition to another topic within a section of a reference book.", &[]),
        tag("pre", "The pre element represents a block of preformatted text, in which structure is represented by typographic conventions rather than by elements.", &[]),
        tag("blockquote", "The blockquote element represents content that is quoted from another source, optionally with a citation which must be within a footer or cite element, and optionally with in-line changes such as annotations and abbreviations.", &["cite"]),
        tag("ol", "The ol element represents a list of items, where the items have been intentionally ordered, such that changing the order would change the meaning of the document.", &["reversed:v", "start", "type:lt"]),
        tag("ul", "The ul element represents a list of items, where the order of the items is not important \u{2014} that is, where changing the order would not materially change the meaning of the document.", &[]),
        tag("li", "The li element represents a list item. If its parent element is an ol, ul, or menu element, then the element is an item of the parent element's list, as defined for those elements. Otherwise, the list item has no defined list-related relationship to any other li element.", &["value"]),
        tag("dl", "The dl element represents an association list consisting of zero or more name-value groups (a description list). A name-value group consists of one or more names (dt elements) followed by one or more values (dd elements), ignoring any nodes other than dt and dd elements. Within a single dl element, there should not be more than one dt element for each name.", &[]),
        tag("dt", "The dt element represents the term, or name, part of a term-description group in a description list (dl element).", &[]),
        tag("dd", "The dd element represents the description, definition, or value, part of a term-description group in a description list (dl element).", &[]),
        tag("figure", "The figure element represents some flow content, optionally with a caption, that is self-contained (like a complete sentence) and is typically referenced as a single unit from the main flow of the document.", &[]),
        tag("figcaption", "The figcaption element represents a caption or legend for the rest of the contents of the figcaption element's parent figure element, if any.", &[]),
        tag("main", "The main element represents the main content of the body of a document or application. The main content area consists of content that is directly related to or expands upon the central topic of a document or central functionality of an application.", &[]),
        tag("div", "The div element has no special meaning at all. It represents its children. It can be used with the class, lang, and title attributes to mark up semantics common to a group of consecutive elements.", &[]),
        // Text-level semantics
        tag("a", "If the a element has an href attribute, then it represents a hyperlink (a hypertext anchor) labeled by its contents.", &["href", "target", "download", "ping", "rel", "hreflang", "type"]),
        tag("em", "The em element represents stress emphasis of its contents.", &[]),
        tag("strong", "The strong element represents strong importance, seriousness, or urgency for its contents.", &[]),
        tag("small", "The small element represents side comments such as small print.", &[]),
        tag("s", "The s element represents contents that are no longer accurate or no longer relevant.", &[]),
        tag("cite", "The cite element represents a reference to a creative work. It must include the title of the work or the name of the author(person, people or organization) or an URL reference, or a reference in abbreviated form as per the conventions used for the addition of citation metadata.", &[]),
        tag("q", "The q element represents some phrasing content quoted from another source.", &["cite"]),
        tag("dfn", "The dfn element represents the defining instance of a term. The paragraph, description list group, or section that is the nearest ancestor of the dfn element must also contain the definition(s) for the term given by the dfn element.", &[]),
        tag("abbr", "The abbr element represents an abbreviation or acronym, optionally with its expansion. The title attribute may be used to provide an expansion of the abbreviation. The attribute, if specified, must contain an expansion of the abbreviation, and nothing else.", &[]),
        tag("ruby", "The ruby element allows one or more spans of phrasing content to be marked with ruby annotations. Ruby annotations are short runs of text presented alongside base text, primarily used in East Asian typography as a guide for pronunciation or to include other annotations. In Japanese, this form of typography is also known as furigana.", &[]),
        tag("rb", "The rb element marks the base text component of a ruby annotation. When it is the child of a ruby element, it doesn't represent anything itself, but its parent ruby element uses it as part of determining what it represents.", &[]),
        tag("rt", "The rt element marks the ruby text component of a ruby annotation. When it is the child of a ruby element or of an rtc element that is itself the child of a ruby element, it doesn't represent anything itself, but its ancestor ruby element uses it as part of determining what it represents.", &[]),
        tag("rp", "The rp element is used to provide fallback text to be shown by user agents that don't support ruby annotations. One widespread convention is to provide parentheses around the ruby text component of a ruby annotation.", &[]),
        tag("time", "The time element represents its contents, along with a machine-readable form of those contents in the datetime attribute. The kind of content is limited to various kinds of dates, times, time-zone offsets, and durations, as described below.", &["datetime"]),
        tag("code", "The code element represents a fragment of computer code. This could be an XML element name, a file name, a computer program, or any other string that a computer would recognize.", &[]),
        tag("var", "The var element represents a variable. This could be an actual variable in a mathematical expression or programming context, an identifier representing a constant, a symbol identifying a physical quantity, a function parameter, or just be a term used as a placeholder in prose.", &[]),
        tag("samp", "The samp element represents sample or quoted output from another program or computing system.", &[]),
        tag("kbd", "The kbd element represents user input (typically keyboard input, although it may also be used to represent other input, such as voice commands).", &[]),
        tag("sub", "The sub element represents a subscript.", &[]),
        tag("sup", "The sup element represents a superscript.", &[]),
        tag("i", "The i element represents a span of text in an alternate voice or mood, or otherwise offset from the normal prose in a manner indicating a different quality of text, such as a taxonomic designation, a technical term, an idiomatic phrase from another language, transliteration, a thought, or a ship name in Western texts.", &[]),
        tag("b", "The b element represents a span of text to which attention is being drawn for utilitarian purposes without conveying any extra importance and with no implication of an alternate voice or mood, such as key words in a document abstract, product names in a review, actionable words in interactive text-driven software, or an article lede.", &[]),
        tag("u", "The u element represents a span of text with an unarticulated, though explicitly rendered, non-textual annotation, such as labeling the text as being a proper name in Chinese text (a Chinese proper name mark), or labeling the text as being misspelt.", &[]),
        tag("mark", "The mark element represents a run of text in one document marked or highlighted for reference purposes, due to its relevance in another context.", &[]),
        tag("bdi", "The bdi element represents a span of text that is to be isolated from its surroundings for the purposes of bidirectional text formatting. [BIDI]", &[]),
        tag("bdo", "The bdo element represents explicit text directionality formatting control for its children. It allows authors to override the Unicode bidirectional algorithm by explicitly specifying a direction override. [BIDI]", &[]),
        tag("span", "The span element doesn't mean anything on its own, but can be useful when used together with the global attributes, e.g. class, lang, or dir. It represents its children.", &[]),
        tag("br", "The br element represents a line break.", &[]),
        tag("wbr", "The wbr element represents a line break opportunity.", &[]),
        // Edits
        tag("ins", "The ins element represents an addition to the document.", &[]),
        tag("del", "The del element represents a removal from the document.", &["cite", "datetime"]),
        // Embedded content
        tag("picture", "The picture element is a container which provides multiple sources to its contained img element to allow authors to declaratively control or give hints to the user agent about which image resource to use, based on the screen pixel density, viewport size, image format, and other factors. It represents its children.", &[]),
        tag("img", "An img element represents an image.", &["alt", "src", "srcset", "crossorigin:xo", "usemap", "ismap:v", "width", "height"]),
        tag("iframe", "The iframe element represents a nested browsing context.", &["src", "srcdoc", "name", "sandbox:sb", "seamless:v", "allowfullscreen:v", "width", "height"]),
        tag("embed", "The embed element provides an integration point for an external (typically non-HTML) application or interactive content.", &["src", "type", "width", "height"]),
        tag("object", "The object element can represent an external resource, which, depending on the type of the resource, will either be treated as an image, as a nested browsing context, or as an external resource to be processed by a plugin.", &["data", "type", "typemustmatch:v", "name", "usemap", "form", "width", "height"]),
        tag("param", "The param element defines parameters for plugins invoked by object elements. It does not represent anything on its own.", &["name", "value"]),
        tag("video", "A video element is used for playing videos or movies, and audio files with captions.", &["src", "crossorigin:xo", "poster", "preload:pl", "autoplay:v", "mediagroup", "loop:v", "muted:v", "controls:v", "width", "height"]),
        tag("audio", "An audio element represents a sound or audio stream.", &["src", "crossorigin:xo", "preload:pl", "autoplay:v", "mediagroup", "loop:v", "muted:v", "controls:v"]),
        tag("source", "The source element allows authors to specify multiple alternative media resources for media elements. It does not represent anything on its own.", &["src", "type"]),
        tag("track", "The track element allows authors to specify explicit external timed text tracks for media elements. It does not represent anything on its own.", &["default:v", "kind:tk", "label", "src", "srclang"]),
        tag("map", "The map element, in conjunction with an img element and any area element descendants, defines an image map. The element represents its children.", &["name"]),
        tag("area", "The area element represents either a hyperlink with some text and a corresponding area on an image map, or a dead area on an image map.", &["alt", "coords", "shape:sh", "href", "target", "download", "ping", "rel", "hreflang", "type"]),
        // Tabular data
        tag("table", "The table element represents data with more than one dimension, in the form of a table.", &["sortable:v", "border"]),
        tag("caption", "The caption element represents the title of the table that is its parent, if it has a parent and that is a table element.", &[]),
        tag("colgroup", "The colgroup element represents a group of one or more columns in the table that is its parent, if it has a parent and that is a table element.", &["span"]),
        tag("col", "If a col element has a parent and that is a colgroup element that itself has a parent that is a table element, then the col element represents one or more columns in the column group represented by that colgroup.", &["span"]),
        tag("tbody", "The tbody element represents a block of rows that consist of a body of data for the parent table element, if the tbody element has a parent and it is a table.", &[]),
        tag("thead", "The thead element represents the block of rows that consist of the column labels (headers) for the parent table element, if the thead element has a parent and it is a table.", &[]),
        tag("tfoot", "The tfoot element represents the block of rows that consist of the column summaries (footers) for the parent table element, if the tfoot element has a parent and it is a table.", &[]),
        tag("tr", "The tr element represents a row of cells in a table.", &[]),
        tag("td", "The td element represents a data cell in a table.", &["colspan", "rowspan", "headers"]),
        tag("th", "The th element represents a header cell in a table.", &["colspan", "rowspan", "headers", "scope:s", "sorted", "abbr"]),
        // Forms
        tag("form", "The form element represents a collection of form-associated elements, some of which can represent editable values that can be submitted to a server for processing.", &["accept-charset", "action", "autocomplete:o", "enctype:et", "method:m", "name", "novalidate:v", "target"]),
        tag("label", "The label element represents a caption in a user interface. The caption can be associated with a specific form control, known as the label element's labeled control, either using the for attribute, or by putting the form control inside the label element itself.", &["form", "for"]),
        tag("input", "The input element represents a typed data field, usually with a form control to allow the user to edit the data.", &["accept", "alt", "autocomplete:inputautocomplete", "autofocus:v", "checked:v", "dirname", "disabled:v", "form", "formaction", "formenctype:et", "formmethod:fm", "formnovalidate:v", "formtarget", "height", "inputmode:im", "list", "max", "maxlength", "min", "minlength", "multiple:v", "name", "pattern", "placeholder", "readonly:v", "required:v", "size", "src", "step", "type:t", "value", "width"]),
        tag("button", "The button element represents a button labeled by its contents.", &["autofocus:v", "disabled:v", "form", "formaction", "formenctype:et", "formmethod:fm", "formnovalidate:v", "formtarget", "name", "type:bt", "value"]),
        tag("select", "The select element represents a control for selecting amongst a set of options.", &["autocomplete:inputautocomplete", "autofocus:v", "disabled:v", "form", "multiple:v", "name", "required:v", "size"]),
        tag("datalist", "The datalist element represents a set of option elements that represent predefined options for other controls. In the rendering, the datalist element represents nothing and it, along with its children, should be hidden.", &[]),
        tag("optgroup", "The optgroup element represents a group of option elements with a common label.", &["disabled:v", "label"]),
        tag("option", "The option element represents an option in a select element or as part of a list of suggestions in a datalist element.", &["disabled:v", "label", "selected:v", "value"]),
        tag("textarea", "The textarea element represents a multiline plain text edit control for the element's raw value. The contents of the control represent the control's default value.", &["autocomplete:inputautocomplete", "autofocus:v", "cols", "dirname", "disabled:v", "form", "inputmode:im", "maxlength", "minlength", "name", "placeholder", "readonly:v", "required:v", "rows", "wrap:w"]),
        tag("output", "The output element represents the result of a calculation performed by the application, or the result of a user action.", &["for", "form", "name"]),
        tag("progress", "The progress element represents the completion progress of a task. The progress is either indeterminate, indicating that progress is being made but that it is not clear how much more work remains to be done before the task is complete, or the progress is a number in the range zero to a maximum, giving the fraction of work that has so far been completed.", &["value", "max"]),
        tag("meter", "The meter element represents a scalar measurement within a known range, or a fractional value; for example disk usage, the relevance of a query result, or the fraction of a voting population to have selected a particular candidate.", &["value", "min", "max", "low", "high", "optimum"]),
        tag("fieldset", "The fieldset element represents a set of form controls optionally grouped under a common name.", &["disabled:v", "form", "name"]),
        tag("legend", "The legend element represents a caption for the rest of the contents of the legend element's parent fieldset element, if any.", &[]),
        // Interactive elements
        tag("details", "The details element represents a disclosure widget from which the user can obtain additional information or controls.", &["open:v"]),
        tag("summary", "The summary element represents a summary, caption, or legend for the rest of the contents of the summary element's parent details element, if any.", &[]),
        tag("dialog", "The dialog element represents a part of an application that a user interacts with to perform a task, for example a dialog box, inspector, or window.", &[]),
        // Scripting
        tag("script", "The script element allows authors to include dynamic script and data blocks in their documents. The element does not represent content for the user.", &["src", "type", "charset", "async:v", "defer:v", "crossorigin:xo", "nonce"]),
        tag("noscript", "The noscript element represents nothing if scripting is enabled, and represents its children if scripting is disabled. It is used to present different markup to user agents that support scripting and those that don't support scripting, by affecting how the document is parsed.", &[]),
        tag("template", "The template element is used to declare fragments of HTML that can be cloned and inserted in the document by script.", &[]),
        tag("canvas", "The canvas element provides scripts with a resolution-dependent bitmap canvas, which can be used for rendering graphs, game graphics, art, or other visual images on the fly.", &["width", "height"]),
    ]
}

pub(super) fn global_attributes() -> Vec<AttributeDef> {
    let descriptors: &[&str] = &[
        "aria-activedescendant",
        "aria-atomic:b",
        "aria-autocomplete:autocomplete",
        "aria-busy:b",
        "aria-checked:tristate",
        "aria-colcount",
        "aria-colindex",
        "aria-colspan",
        "aria-controls",
        "aria-current:current",
        "aria-describedat",
        "aria-describedby",
        "aria-disabled:b",
        "aria-dropeffect:dropeffect",
        "aria-errormessage",
        "aria-expanded:u",
        "aria-flowto",
        "aria-grabbed:u",
        "aria-haspopup:b",
        "aria-hidden:b",
        "aria-invalid:invalid",
        "aria-kbdshortcuts",
        "aria-label",
        "aria-labelledby",
        "aria-level",
        "aria-live:live",
        "aria-modal:b",
        "aria-multiline:b",
        "aria-multiselectable:b",
        "aria-orientation:orientation",
        "aria-owns",
        "aria-placeholder",
        "aria-posinset",
        "aria-pressed:tristate",
        "aria-readonly:b",
        "aria-relevant:relevant",
        "aria-required:b",
        "aria-roledescription",
        "aria-rowcount",
        "aria-rowindex",
        "aria-rowspan",
        "aria-selected:u",
        "aria-setsize",
        "aria-sort:sort",
        "aria-valuemax",
        "aria-valuemin",
        "aria-valuenow",
        "aria-valuetext",
        "accesskey",
        "class",
        "contenteditable:b",
        "contextmenu",
        "dir:d",
        "draggable:b",
        "dropzone",
        "hidden:v",
        "id",
        "itemid",
        "itemprop",
        "itemref",
        "itemscope:v",
        "itemtype",
        "lang",
        "role:roles",
        "spellcheck:b",
        "style",
        "tabindex",
        "title",
        "translate:y",
        // event handlers
        "onabort",
        "onblur",
        "oncanplay",
        "oncanplaythrough",
        "onchange",
        "onclick",
        "oncontextmenu",
        "ondblclick",
        "ondrag",
        "ondragend",
        "ondragenter",
        "ondragleave",
        "ondragover",
        "ondragstart",
        "ondrop",
        "ondurationchange",
        "onemptied",
        "onended",
        "onerror",
        "onfocus",
        "onformchange",
        "onforminput",
        "oninput",
        "oninvalid",
        "onkeydown",
        "onkeypress",
        "onkeyup",
        "onload",
        "onloadeddata",
        "onloadedmetadata",
        "onloadstart",
        "onmousedown",
        "onmousemove",
        "onmouseout",
        "onmouseover",
        "onmouseup",
        "onmousewheel",
        "onpause",
        "onplay",
        "onplaying",
        "onprogress",
        "onratechange",
        "onreset",
        "onresize",
        "onreadystatechange",
        "onscroll",
        "onseeked",
        "onseeking",
        "onselect",
        "onshow",
        "onstalled",
        "onsubmit",
        "onsuspend",
        "ontimeupdate",
        "onvolumechange",
        "onwaiting",
    ];
    descriptors.iter().map(|d| attr(d)).collect()
}

pub(super) fn value_sets() -> HashMap<String, Vec<String>> {
    let sets: &[(&str, &[&str])] = &[
        ("b", &["true", "false"]),
        ("u", &["true", "false", "undefined"]),
        ("o", &["on", "off"]),
        ("y", &["yes", "no"]),
        ("w", &["soft", "hard"]),
        ("d", &["ltr", "rtl", "auto"]),
        ("m", &["GET", "POST", "dialog"]),
        ("fm", &["GET", "POST"]),
        ("s", &["row", "col", "rowgroup", "colgroup"]),
        ("t", &[
            "hidden", "text", "search", "tel", "url", "email", "password", "datetime", "date",
            "month", "week", "time", "datetime-local", "number", "range", "color", "checkbox",
            "radio", "file", "submit", "image", "reset", "button",
        ]),
        ("im", &[
            "verbatim", "latin", "latin-name", "latin-prose", "full-width-latin", "kana",
            "kana-name", "katakana", "numeric", "tel", "email", "url",
        ]),
        ("bt", &["button", "submit", "reset", "menu"]),
        ("lt", &["1", "a", "A", "i", "I"]),
        ("mt", &["context", "toolbar"]),
        ("mit", &["command", "checkbox", "radio"]),
        ("et", &["application/x-www-form-urlencoded", "multipart/form-data", "text/plain"]),
        ("tk", &["subtitles", "captions", "descriptions", "chapters", "metadata"]),
        ("pl", &["none", "metadata", "auto"]),
        ("sh", &["circle", "default", "poly", "rect"]),
        ("xo", &["anonymous", "use-credentials"]),
        ("sb", &[
            "allow-forms", "allow-modals", "allow-pointer-lock", "allow-popups",
            "allow-popups-to-escape-sandbox", "allow-same-origin", "allow-scripts",
            "allow-top-navigation",
        ]),
        ("tristate", &["true", "false", "mixed", "undefined"]),
        ("inputautocomplete", &[
            "additional-name", "address-level1", "address-level2", "address-level3",
            "address-level4", "address-line1", "address-line2", "address-line3", "bday",
            "bday-year", "bday-day", "bday-month", "billing", "cc-additional-name", "cc-csc",
            "cc-exp", "cc-exp-month", "cc-exp-year", "cc-family-name", "cc-given-name",
            "cc-name", "cc-number", "cc-type", "country", "country-name", "current-password",
            "email", "family-name", "fax", "given-name", "home", "honorific-prefix",
            "honorific-suffix", "impp", "language", "mobile", "name", "new-password",
            "nickname", "organization", "organization-title", "pager", "photo", "postal-code",
            "sex", "shipping", "street-address", "tel-area-code", "tel", "tel-country-code",
            "tel-extension", "tel-local", "tel-local-prefix", "tel-local-suffix",
            "tel-national", "transaction-amount", "transaction-currency", "url", "username",
            "work",
        ]),
        ("autocomplete", &["inline", "list", "both", "none"]),
        ("current", &["page", "step", "location", "date", "time", "true", "false"]),
        ("dropeffect", &["copy", "move", "link", "execute", "popup", "none"]),
        ("invalid", &["grammar", "false", "spelling", "true"]),
        ("live", &["off", "polite", "assertive"]),
        ("orientation", &["vertical", "horizontal", "undefined"]),
        ("relevant", &["additions", "removals", "text", "all", "additions text"]),
        ("sort", &["ascending", "descending", "none", "other"]),
        ("roles", &[
            "alert", "alertdialog", "button", "checkbox", "dialog", "gridcell", "link", "log",
            "marquee", "menuitem", "menuitemcheckbox", "menuitemradio", "option", "progressbar",
            "radio", "scrollbar", "searchbox", "slider", "spinbutton", "status", "switch",
            "tab", "tabpanel", "textbox", "timer", "tooltip", "treeitem", "combobox", "grid",
            "listbox", "menu", "menubar", "radiogroup", "tablist", "tree", "treegrid",
            "application", "article", "cell", "columnheader", "definition", "directory",
            "document", "feed", "figure", "group", "heading", "img", "list", "listitem",
            "math", "none", "note", "presentation", "region", "row", "rowgroup", "rowheader",
            "separator", "table", "term", "text", "toolbar", "banner", "complementary",
            "contentinfo", "form", "main", "navigation", "search",
        ]),
    ];

    sets.iter()
        .map(|(key, values)| {
            (
                key.to_string(),
                values.iter().map(|v| v.to_string()).collect(),
            )
        })
        .collect()
}
