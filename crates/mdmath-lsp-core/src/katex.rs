//! KaTeX command inventory, grouped by semantic category and arity
//!
//! These tables are plain input data for the candidate builder in
//! [`crate::completion`]; the builder does not depend on how many
//! groups or entries exist. Names are stored without the leading
//! backslash. A name may appear in more than one group (e.g. `to`
//! is both an arrow and a logic symbol); the builder deduplicates
//! within each arity bucket.

// === ZERO-ARGUMENT COMMANDS ===

pub const DELIMITERS_0: &[&str] = &[
    "lparen", "rparen", "lceil", "rceil", "uparrow", "lbrack", "rbrack", "lfloor", "rfloor",
    "downarrow", "lbrace", "rbrace", "lmoustache", "rmoustache", "updownarrow", "langle",
    "rangle", "lgroup", "rgroup", "Uparrow", "vert", "ulcorner", "urcorner", "Downarrow", "Vert",
    "llcorner", "lrcorner", "Updownarrow", "lvert", "rvert", "lVert", "rVert", "backslash",
    "lang", "rang", "lt", "gt",
];

pub const DELIMITER_SIZING_0: &[&str] = &[
    "left", "big", "bigl", "bigm", "bigr", "middle", "Big", "Bigl", "Bigm", "Bigr", "right",
    "bigg", "biggl", "biggm", "biggr", "Bigg", "Biggl", "Biggm", "Biggr",
];

pub const GREEK_LETTERS_0: &[&str] = &[
    "Gamma", "Delta", "Theta", "Lambda", "Xi", "Pi", "Sigma", "Upsilon", "Phi", "Psi", "Omega",
    "varGamma", "varDelta", "varTheta", "varLambda", "varXi", "varPi", "varSigma", "varUpsilon",
    "varPhi", "varPsi", "varOmega", "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta",
    "theta", "iota", "kappa", "lambda", "mu", "nu", "xi", "omicron", "pi", "rho", "sigma", "tau",
    "upsilon", "phi", "chi", "psi", "omega", "varepsilon", "varkappa", "vartheta", "varpi",
    "varrho", "varsigma", "varphi", "digamma",
];

pub const OTHER_LETTERS_0: &[&str] = &[
    "imath", "jmath", "aleph", "alefsym", "beth", "gimel", "daleth", "eth", "ell", "hbar",
    "hslash", "mho", "partial", "nabla", "Bbbk", "Re", "Im", "wp", "weierp", "Game", "Finv",
];

pub const SPACING_0: &[&str] = &[
    "thinspace", "medspace", "thickspace", "enspace", "quad", "qquad", "negthinspace",
    "negmedspace", "negthickspace", "nobreakspace", "space",
];

pub const VERTICAL_LAYOUT_0: &[&str] = &["atop"];

pub const LOGIC_AND_SET_THEORY_0: &[&str] = &[
    "forall", "exists", "nexists", "in", "notin", "ni", "complement", "subset", "supset", "mid",
    "land", "lor", "therefore", "because", "mapsto", "to", "gets", "leftrightarrow", "neg",
    "lnot", "implies", "impliedby", "iff", "emptyset", "varnothing",
];

pub const MACROS_0: &[&str] = &["TeX", "LaTeX", "KaTeX"];

pub const BIG_OPERATORS_0: &[&str] = &[
    "sum", "prod", "coprod", "int", "iint", "iiint", "oint", "oiint", "oiiint", "intop",
    "smallint", "bigcap", "bigcup", "bigsqcup", "bigvee", "bigwedge", "bigodot", "bigotimes",
    "bigoplus", "biguplus",
];

pub const BINARY_OPERATORS_0: &[&str] = &[
    "cdot", "cdotp", "centerdot", "circ", "circledast", "circledcirc", "circleddash", "amalg",
    "And", "ast", "barwedge", "bigcirc", "bmod", "boxdot", "boxminus", "boxplus", "boxtimes",
    "cap", "Cap", "cup", "Cup", "curlyvee", "curlywedge", "div", "divideontimes", "dotplus",
    "doublebarwedge", "doublecap", "doublecup", "gtrdot", "intercal", "land", "leftthreetimes",
    "ldotp", "lor", "lessdot", "lhd", "ltimes", "mod", "mp", "odot", "ominus", "oplus", "otimes",
    "oslash", "pm", "plusmn", "pmod", "pod", "rhd", "rightthreetimes", "rtimes", "setminus",
    "smallsetminus", "sqcap", "sqcup", "times", "unlhd", "unrhd", "uplus", "vee", "veebar",
    "wedge", "wr",
];

pub const BINOMIAL_COEFFICIENTS_0: &[&str] = &["choose", "brack", "brace"];

pub const FRACTIONS_0: &[&str] = &["over", "above"];

pub const MATH_OPERATORS_0: &[&str] = &[
    "arcsin", "arccos", "arctan", "arctg", "arcctg", "arg", "ch", "cos", "cosec", "cosh", "cot",
    "cotg", "coth", "csc", "ctg", "cth", "deg", "dim", "exp", "hom", "ker", "lg", "ln", "log",
    "sec", "sin", "sinh", "sh", "tan", "tanh", "tg", "th", "argmax", "argmin", "det", "gcd",
    "inf", "lim", "liminf", "limsup", "max", "min", "Pr", "sup",
];

pub const RELATIONS_0: &[&str] = &[
    "approx", "approxeq", "asymp", "backepsilon", "backsim", "backsimeq", "between", "bowtie",
    "bumpeq", "Bumpeq", "circeq", "colonapprox", "Colonapprox", "coloneq", "Coloneq", "coloneqq",
    "Coloneqq", "colonsim", "Colonsim", "cong", "curlyeqprec", "curlyeqsucc", "dashv", "dblcolon",
    "doteq", "Doteq", "doteqdot", "eqcirc", "eqcolon", "Eqcolon", "eqqcolon", "Eqqcolon", "eqsim",
    "eqslantgtr", "eqslantless", "equiv", "fallingdotseq", "frown", "ge", "geq", "geqq",
    "geqslant", "gg", "ggg", "gggtr", "gt", "gtrapprox", "gtreqless", "gtreqqless", "gtrless",
    "gtrsim", "in", "Join", "le", "leq", "leqq", "leqslant", "lessapprox", "lesseqgtr",
    "lesseqqgtr", "lessgtr", "lesssim", "ll", "lll", "llless", "lt", "mid", "models", "multimap",
    "owns", "parallel", "perp", "pitchfork", "prec", "precapprox", "preccurlyeq", "preceq",
    "precsim", "propto", "risingdotseq", "shortmid", "shortparallel", "sim", "simeq",
    "smallfrown", "smallsmile", "smile", "sqsubset", "sqsubseteq", "sqsupset", "sqsupseteq",
    "sub", "sube", "subset", "subseteq", "subseteqq", "succ", "succapprox", "succcurlyeq",
    "succeq", "succsim", "supe", "supset", "supseteq", "supseteqq", "thickapprox", "thicksim",
    "trianglelefteq", "triangleq", "trianglerighteq", "varpropto", "vartriangle",
    "vartriangleleft", "vartriangleright", "vcentcolon", "vdash", "vDash", "Vdash", "Vvdash",
];

pub const NEGATED_RELATIONS_0: &[&str] = &[
    "gnapprox", "gneq", "gneqq", "gnsim", "gvertneqq", "lnapprox", "lneq", "lneqq", "lnsim",
    "lvertneqq", "ncong", "ne", "neq", "ngeq", "ngeqq", "ngeqslant", "ngtr", "nleq", "nleqq",
    "nleqslant", "nless", "nmid", "notin", "nparallel", "nprec", "npreceq", "nshortmid",
    "nshortparallel", "nsim", "nsubseteq", "nsubseteqq", "nsucc", "nsucceq", "nsupseteq",
    "nsupseteqq", "ntriangleleft", "ntrianglelefteq", "ntriangleright", "ntrianglerighteq",
    "nvdash", "nvDash", "nVdash", "nVDash", "precnapprox", "precneqq", "precnsim", "subsetneq",
    "subsetneqq", "succnapprox", "succneqq", "succnsim", "supsetneq", "supsetneqq", "varsubsetneq",
    "varsubsetneqq", "varsupsetneq", "varsupsetneqq",
];

pub const ARROWS_0: &[&str] = &[
    "circlearrowleft", "circlearrowright", "curvearrowleft", "curvearrowright", "Darr", "dArr",
    "darr", "dashleftarrow", "dashrightarrow", "downarrow", "Downarrow", "downdownarrows",
    "downharpoonleft", "downharpoonright", "gets", "Harr", "hArr", "harr", "hookleftarrow",
    "hookrightarrow", "iff", "impliedby", "implies", "Larr", "lArr", "larr", "leadsto",
    "leftarrow", "Leftarrow", "leftarrowtail", "leftharpoondown", "leftharpoonup",
    "leftleftarrows", "leftrightarrow", "Leftrightarrow", "leftrightarrows", "leftrightharpoons",
    "leftrightsquigarrow", "Lleftarrow", "longleftarrow", "Longleftarrow", "longleftrightarrow",
    "Longleftrightarrow", "longmapsto", "longrightarrow", "Longrightarrow", "looparrowleft",
    "looparrowright", "Lrarr", "lrArr", "lrarr", "Lsh", "mapsto", "nearrow", "nleftarrow",
    "nLeftarrow", "nleftrightarrow", "nLeftrightarrow", "nrightarrow", "nRightarrow", "nwarrow",
    "Rarr", "rArr", "rarr", "restriction", "rightarrow", "Rightarrow", "rightarrowtail",
    "rightharpoondown", "rightharpoonup", "rightleftarrows", "rightleftharpoons",
    "rightrightarrows", "rightsquigarrow", "Rrightarrow", "Rsh", "searrow", "swarrow", "to",
    "twoheadleftarrow", "twoheadrightarrow", "Uarr", "uArr", "uarr", "uparrow", "Uparrow",
    "updownarrow", "Updownarrow", "upharpoonleft", "upharpoonright", "upuparrows",
];

pub const FONT_0: &[&str] = &["rm", "bf", "it", "sf", "tt"];

pub const SIZE_0: &[&str] = &[
    "Huge", "huge", "LARGE", "Large", "large", "normalsize", "small", "footnotesize",
    "scriptsize", "tiny",
];

pub const STYLE_0: &[&str] = &[
    "displaystyle", "textstyle", "scriptstyle", "scriptscriptstyle", "limits", "nolimits",
    "verb",
];

pub const SYMBOLS_AND_PUNCTUATION_0: &[&str] = &[
    "cdots", "ddots", "ldots", "vdots", "dotsb", "dotsc", "dotsi", "dotsm", "dotso", "sdot",
    "mathellipsis", "Box", "square", "blacksquare", "triangle", "triangledown", "triangleleft",
    "triangleright", "bigtriangledown", "bigtriangleup", "blacktriangle", "blacktriangledown",
    "blacktriangleleft", "blacktriangleright", "diamond", "Diamond", "lozenge", "blacklozenge",
    "star", "bigstar", "clubsuit", "clubs", "diamondsuit", "diamonds", "spadesuit", "spades",
    "heartsuit", "hearts", "maltese", "checkmark", "dagger", "dag", "ddagger", "ddag", "angle",
    "measuredangle", "sphericalangle", "top", "bot", "prime", "backprime", "infty", "degree",
    "flat", "natural", "sharp", "diagdown", "diagup", "circledR", "circledS", "copyright",
    "pounds", "yen", "surd", "colon", "lq", "rq", "P", "S", "sect", "minuso",
];

pub const DEBUGGING_0: &[&str] = &["message", "errmessage", "show"];

// === ONE-ARGUMENT COMMANDS ===

pub const ACCENTS_1: &[&str] = &[
    "acute", "bar", "bcancel", "boxed", "breve", "cancel", "check", "ddot", "dot", "fbox",
    "grave", "hat", "widehat", "mathring", "overbrace", "overgroup", "overleftarrow",
    "overleftharpoon", "overleftrightarrow", "overline", "overlinesegment", "overrightarrow",
    "overrightharpoon", "sout", "tilde", "widetilde", "utilde", "underbar", "underbrace",
    "undergroup", "underleftarrow", "underleftrightarrow", "underline", "underlinesegment",
    "underrightarrow", "vec", "widecheck",
];

pub const ANNOTATION_1: &[&str] = &["tag"];

pub const VERTICAL_LAYOUT_1: &[&str] = &["substack"];

pub const OVERLAP_1: &[&str] = &["llap", "rlap", "clap", "mathllap", "mathrlap", "mathclap", "smash"];

pub const SPACING_1: &[&str] = &[
    "kern", "mkern", "mskip", "hskip", "hspace", "phantom", "hphantom", "vphantom",
];

pub const LOGIC_AND_SET_THEORY_1: &[&str] = &["Set", "set"];

pub const MATH_OPERATORS_1: &[&str] = &["operatorname"];

pub const SQRT_1: &[&str] = &["sqrt"];

pub const EXTENSIBLE_ARROWS_1: &[&str] = &[
    "xleftarrow", "xrightarrow", "xLeftarrow", "xRightarrow", "xleftrightarrow",
    "xLeftrightarrow", "xhookleftarrow", "xhookrightarrow", "xtwoheadleftarrow",
    "xtwoheadrightarrow", "xleftharpoonup", "xrightharpoonup", "xleftharpoondown",
    "xrightharpoondown", "xleftrightharpoons", "xrightleftharpoons", "xtofrom", "xmapsto",
    "xlongequal",
];

pub const FONT_1: &[&str] = &[
    "mathrm", "mathbf", "mathit", "mathnormal", "textbf", "textit", "textrm", "bold", "mathsf",
    "texttt", "boldsymbol", "mathtt", "textnormal", "bm", "mathcal", "mathfrak", "mathscr",
    "mathbb", "text", "textsf", "textup", "emph", "textmd", "textsl",
];

pub const BRAKET_NOTATION_1: &[&str] = &["bra", "Bra", "ket", "Ket", "braket"];

pub const CLASS_ASSIGNMENT_1: &[&str] = &[
    "mathbin", "mathclose", "mathinner", "mathop", "mathopen", "mathord", "mathpunct", "mathrel",
];

// === TWO-ARGUMENT COMMANDS ===

pub const VERTICAL_LAYOUT_2: &[&str] = &["stackrel", "overset", "underset", "raisebox"];

pub const BINOMIAL_COEFFICIENTS_2: &[&str] = &["binom", "dbinom", "tbinom"];

pub const FRACTIONS_2: &[&str] = &["frac", "dfrac", "tfrac", "cfrac", "genfrac"];

pub const COLOR_2: &[&str] = &["colorbox", "fcolorbox", "textcolor"];

// === ENVIRONMENTS ===

/// Environment names offered as the first placeholder of the `\begin`
/// snippet.
pub const ENVIRONMENTS: &[&str] = &[
    "matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix", "smallmatrix", "array",
    "darray", "aligned", "alignedat", "gathered", "cases", "dcases", "rcases", "equation",
    "split", "align", "gather", "CD",
];
