//! Bundled template used when no custom template is configured

/// Stock Eloquent model template
///
/// Placeholders: `{{table}}`, `{{primaryKey}}`, `{{timestamps}}`, `{{fillable}}`,
/// `{{attribute}}`, `{{comment}}`. The `DummyNamespace` and `DummyClass` tokens are
/// filled in from the class target after rendering.
pub const MODEL_STUB: &str = r"<?php

namespace DummyNamespace;

use Illuminate\Database\Eloquent\Model;

/**
 * This is the model class for table '{{table}}'.
 *
 * {{comment}}
 */
class DummyClass extends Model
{
    /**
     * The table associated with the model.
     *
     * @var string
     */
    protected $table = '{{table}}';

    /**
     * The primary key for the model.
     *
     * @var string
     */
    protected $primaryKey = '{{primaryKey}}';

    {{timestamps}}

    /**
     * The attributes that are mass assignable.
     *
     * @var array
     */
    protected $fillable = [
        {{fillable}}
    ];

    /**
     * Get the attribute labels.
     *
     * @return array
     */
    public function attributeLabels()
    {
        return [
            {{attribute}}
        ];
    }
}
";
